mod simulation;
mod driver;

pub use simulation::{Generation, Simulation, SimulationConfig};
pub use driver::{CancelToken, DEFAULT_INTERVAL, Driver, DriverOptions, RunSummary};
