mod cell;
mod grid;
mod rules;
mod patterns;
mod seed;
mod algorithm;

pub use cell::Cell;
pub use grid::{Grid, GridError, DEFAULT_ROWS, DEFAULT_COLUMNS};
pub use rules::next_state;
pub use patterns::{Pattern, presets};
pub use seed::{InitialState, SeedError, pattern_grid, random_grid};
pub use algorithm::Algorithm;
