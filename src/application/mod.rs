mod simulation;
mod ticker;

pub use simulation::{RunState, Simulation};
pub use ticker::{TICK_PERIOD, Ticker};
