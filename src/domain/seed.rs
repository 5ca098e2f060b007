//! Initial-state generation: a fixed pattern or `k` randomly chosen cells.

use super::{Cell, Grid, GridError, Pattern};
use rand::Rng;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("cannot place {requested} alive cells on a grid of {capacity} cells")]
    TooManyCells { requested: usize, capacity: usize },
    #[error("pattern {name} ({height}x{width}) does not fit a {rows}x{cols} grid")]
    PatternTooLarge {
        name: &'static str,
        height: usize,
        width: usize,
        rows: usize,
        cols: usize,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// How the first generation is populated
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitialState {
    /// Place a pattern centered on the grid
    Pattern(Pattern),
    /// Mark exactly `alive` distinct cells at random
    Random { alive: usize },
}

impl InitialState {
    /// Build the starting grid. The rng is only drawn from in random mode.
    pub fn build<R: Rng>(&self, rows: usize, cols: usize, rng: &mut R) -> Result<Grid, SeedError> {
        match self {
            InitialState::Pattern(pattern) => pattern_grid(pattern, rows, cols),
            InitialState::Random { alive } => random_grid(rows, cols, *alive, rng),
        }
    }
}

/// Place `pattern` in the middle of an otherwise dead grid
pub fn pattern_grid(pattern: &Pattern, rows: usize, cols: usize) -> Result<Grid, SeedError> {
    if !pattern.fits(rows, cols) {
        return Err(SeedError::PatternTooLarge {
            name: pattern.name,
            height: pattern.height,
            width: pattern.width,
            rows,
            cols,
        });
    }

    let mut grid = Grid::new(rows, cols);
    let (row, col) = pattern.centered_origin(rows, cols);
    pattern.place_on(&mut grid, row, col)?;
    debug!(pattern = pattern.name, row, col, "placed pattern");
    Ok(grid)
}

/// Rejection sampling: draw a random cell, redraw while it is already alive.
///
/// `alive` is checked against the grid capacity up front, so every draw loop
/// has at least one dead cell left to find.
pub fn random_grid<R: Rng>(
    rows: usize,
    cols: usize,
    alive: usize,
    rng: &mut R,
) -> Result<Grid, SeedError> {
    let mut grid = Grid::new(rows, cols);
    let capacity = grid.capacity();
    if alive > capacity {
        return Err(SeedError::TooManyCells { requested: alive, capacity });
    }

    let mut draws = 0usize;
    for _ in 0..alive {
        let (row, col) = loop {
            draws += 1;
            let candidate = (rng.random_range(0..rows), rng.random_range(0..cols));
            if !grid.is_alive(candidate.0, candidate.1) {
                break candidate;
            }
        };
        grid.set(row, col, Cell::Alive)?;
    }

    debug!(alive, capacity, draws, "seeded random grid");
    Ok(grid)
}
