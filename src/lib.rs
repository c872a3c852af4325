// Domain layer - grid engine
pub mod domain;

// Application layer - run state and cadence
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GRID_SIZE, Pattern, presets};
pub use application::{RunState, Simulation, Ticker};
pub use rendering::{DrawCommand, render_instructions};
