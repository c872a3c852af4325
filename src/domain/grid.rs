use std::ops::{Index, IndexMut};

use super::Cell;

/// Side length of the square simulation grid
pub const GRID_SIZE: usize = 64;

/// Grid owns one generation of the cellular automaton.
/// Always exactly `GRID_SIZE` x `GRID_SIZE`, stored row-major, with
/// toroidal neighbor lookups (edges wrap to the opposite side).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::Dead; GRID_SIZE * GRID_SIZE],
        }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (GRID_SIZE, GRID_SIZE)
    }

    const fn get_index(row: usize, col: usize) -> usize {
        row * GRID_SIZE + col
    }

    fn checked_index(row: usize, col: usize) -> usize {
        assert!(
            row < GRID_SIZE && col < GRID_SIZE,
            "cell ({row}, {col}) out of bounds for {GRID_SIZE}x{GRID_SIZE} grid"
        );
        Self::get_index(row, col)
    }

    /// Get cell at position, `None` when outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < GRID_SIZE && col < GRID_SIZE).then(|| self.cells[Self::get_index(row, col)])
    }

    /// Set cell at position. Panics when outside the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = Self::checked_index(row, col);
        self.cells[idx] = cell;
    }

    /// Reset every cell to dead, in place
    pub fn initialize(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Clear all cells to dead state (builder form of `initialize`)
    pub fn clear(mut self) -> Self {
        self.initialize();
        self
    }

    /// Wrapped coordinates of the cell at `(row, col)` shifted by an offset
    /// in -1..=1 on each axis. Never leaves `0..GRID_SIZE`.
    pub const fn neighbor_position(
        row: usize,
        col: usize,
        row_offset: isize,
        col_offset: isize,
    ) -> (usize, usize) {
        debug_assert!(row_offset.abs() <= 1 && col_offset.abs() <= 1);
        let r = ((GRID_SIZE + row) as isize + row_offset) as usize % GRID_SIZE;
        let c = ((GRID_SIZE + col) as isize + col_offset) as usize % GRID_SIZE;
        (r, c)
    }

    /// Count live neighbors using toroidal wrapping (grid wraps like a torus)
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(|(dr, dc)| Self::neighbor_position(row, col, dr, dc))
            .filter(|&pos| self[pos].is_alive())
            .count() as u8
    }

    /// State of `(row, col)` in the next generation
    pub fn next_state(&self, row: usize, col: usize) -> Cell {
        self[(row, col)].evolve(self.count_live_neighbors(row, col))
    }

    /// Pure functional evolution - returns the next generation.
    /// Every neighbor count reads `self`, so no cell sees a partial update.
    pub fn evolve(&self) -> Self {
        let cells = (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
            .map(|(row, col)| self.next_state(row, col))
            .collect();

        Self { cells }
    }

    /// Flip a single cell in place. Panics when outside the grid.
    pub fn toggle(&mut self, row: usize, col: usize) {
        let idx = Self::checked_index(row, col);
        self.cells[idx] = self.cells[idx].toggle();
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / GRID_SIZE, idx % GRID_SIZE, cell))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[Self::checked_index(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.cells[Self::checked_index(row, col)]
    }
}
