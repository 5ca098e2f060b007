//! Algorithm enum for selecting the step implementation.

use super::Grid;

/// Available evolution algorithms.
/// Both produce identical generations; they differ only in scheduling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Rows spread over the rayon thread pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "serial",
            Algorithm::Parallel => "parallel",
        }
    }

    /// Compute the next grid with this strategy
    pub fn evolve(&self, grid: &Grid) -> Grid {
        match self {
            Algorithm::Serial => grid.evolve(),
            Algorithm::Parallel => grid.evolve_parallel(),
        }
    }
}
