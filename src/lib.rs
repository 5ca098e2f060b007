// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Engine state and the refresh loop
pub mod application;

// Infrastructure layer - terminal rendering, prompts, configuration
pub mod rendering;
pub mod input;
pub mod config;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Grid, InitialState, Pattern, presets};
pub use application::{CancelToken, Driver, DriverOptions, Generation, Simulation, SimulationConfig};
pub use rendering::{FrameSink, Glyphs, render_frame};
