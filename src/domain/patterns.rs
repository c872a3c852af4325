use super::{Cell, Grid, GRID_SIZE};

/// Represents a pattern that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: Vec<(usize, usize)>, // (row, col) offsets of alive cells
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        Self { name, description, cells }
    }

    /// Bounding box as (rows, cols)
    pub fn extent(&self) -> (usize, usize) {
        let rows = self.cells.iter().map(|(r, _)| *r).max().map_or(0, |r| r + 1);
        let cols = self.cells.iter().map(|(_, c)| *c).max().map_or(0, |c| c + 1);
        (rows, cols)
    }

    /// Stamp the pattern with its top-left corner at `(row, col)`.
    /// Offsets running past an edge wrap to the opposite side.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        for &(dr, dc) in &self.cells {
            grid.set((row + dr) % GRID_SIZE, (col + dc) % GRID_SIZE, Cell::Alive);
        }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Blinker - period 2 oscillator, horizontal phase
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (0, 1), (0, 2)])
    }

    /// Block - the smallest still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Glider - simplest spaceship, moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![blinker(), block(), toad(), glider()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamped(pattern: &Pattern, row: usize, col: usize) -> Grid {
        let mut grid = Grid::new();
        pattern.place_on(&mut grid, row, col);
        grid
    }

    #[test]
    fn test_extent() {
        assert_eq!(presets::blinker().extent(), (1, 3));
        assert_eq!(presets::glider().extent(), (3, 3));
    }

    #[test]
    fn test_place_sets_population() {
        for pattern in presets::all_patterns() {
            assert_eq!(stamped(&pattern, 20, 20).population(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_place_wraps_edges() {
        let grid = stamped(&presets::blinker(), GRID_SIZE - 1, GRID_SIZE - 1);
        assert!(grid[(GRID_SIZE - 1, GRID_SIZE - 1)].is_alive());
        assert!(grid[(GRID_SIZE - 1, 0)].is_alive());
        assert!(grid[(GRID_SIZE - 1, 1)].is_alive());
    }

    #[test]
    fn test_toad_period_two() {
        let toad = stamped(&presets::toad(), 40, 40);
        assert_ne!(toad.evolve(), toad);
        assert_eq!(toad.evolve().evolve(), toad);
    }

    #[test]
    fn test_glider_translates_after_four_generations() {
        let mut grid = stamped(&presets::glider(), 10, 10);
        for _ in 0..4 {
            grid = grid.evolve();
        }
        assert_eq!(grid, stamped(&presets::glider(), 11, 11));
    }

    #[test]
    fn test_glider_survives_wraparound() {
        let mut grid = stamped(&presets::glider(), GRID_SIZE - 2, GRID_SIZE - 2);
        for _ in 0..4 * GRID_SIZE {
            grid = grid.evolve();
        }
        assert_eq!(grid, stamped(&presets::glider(), GRID_SIZE - 2, GRID_SIZE - 2));
    }
}
