use log::{debug, info, trace};

use super::Ticker;
use crate::domain::Grid;

/// Control state of the simulation.
/// Stopped is the only state where the grid can be edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
    Paused,
}

impl RunState {
    pub fn label(self) -> &'static str {
        match self {
            RunState::Stopped => "Stopped",
            RunState::Running => "Running",
            RunState::Paused => "Paused",
        }
    }

    /// Whether pointer edits are accepted in this state
    pub fn accepts_edits(self) -> bool {
        self == RunState::Stopped
    }
}

/// Simulation orchestrates the grid engine.
/// This is the application layer: it owns the run state and the cadence,
/// the grid itself only knows how to compute generations.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub grid: Grid,
    pub state: RunState,
    pub generation: u64,
    ticker: Ticker,
}

impl Simulation {
    pub fn new() -> Self {
        Self::with_ticker(Ticker::default())
    }

    pub fn with_ticker(ticker: Ticker) -> Self {
        Self {
            grid: Grid::new(),
            state: RunState::Stopped,
            generation: 0,
            ticker,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Stopped -> Running, or Paused -> Running without touching the grid
    pub fn start(mut self) -> Self {
        match self.state {
            RunState::Running => {}
            RunState::Stopped | RunState::Paused => {
                info!("{} -> Running at generation {}", self.state.label(), self.generation);
                self.ticker.reset();
                self.state = RunState::Running;
            }
        }
        self
    }

    /// Running -> Paused; the grid is frozen as is
    pub fn pause(mut self) -> Self {
        match self.state {
            RunState::Running => {
                info!("Running -> Paused at generation {}", self.generation);
                self.state = RunState::Paused;
            }
            RunState::Stopped | RunState::Paused => {
                debug!("pause ignored while {}", self.state.label());
            }
        }
        self
    }

    /// Any state -> Stopped; always re-initializes the grid
    pub fn stop(mut self) -> Self {
        info!("{} -> Stopped, clearing grid", self.state.label());
        self.state = RunState::Stopped;
        self.grid.initialize();
        self.generation = 0;
        self.ticker.reset();
        self
    }

    /// Flip one cell if the grid is editable. Returns whether it was applied.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        if !self.state.accepts_edits() {
            debug!("toggle ({row}, {col}) rejected while {}", self.state.label());
            return false;
        }
        self.grid.toggle(row, col);
        debug!("toggled ({row}, {col}) -> {:?}", self.grid[(row, col)]);
        true
    }

    /// Replace the grid with its next generation
    pub fn advance(&mut self) {
        self.grid = self.grid.evolve();
        self.generation += 1;
        trace!(
            "generation {} population {}",
            self.generation,
            self.grid.population()
        );
    }

    /// Update simulation by one frame.
    /// Advances at most one generation, and only while running.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running() {
            return self;
        }
        if self.ticker.tick(delta_time) {
            self.advance();
        }
        self
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
