mod cell;
mod grid;
mod patterns;

pub use cell::Cell;
pub use grid::{Grid, GRID_SIZE};
pub use patterns::{Pattern, presets};
