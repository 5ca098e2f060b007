use super::{Cell, Grid, GridError};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().map_or(0, |r| r + 1);
        let width = cells.iter().map(|(_, c)| *c).max().map_or(0, |c| c + 1);
        Self { name, description, width, height, cells }
    }

    /// Whether the pattern's bounding box fits on a grid of this size
    pub const fn fits(&self, rows: usize, cols: usize) -> bool {
        self.height <= rows && self.width <= cols
    }

    /// Place pattern on grid with its top-left corner at (row, col)
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) -> Result<(), GridError> {
        for (dr, dc) in &self.cells {
            grid.set(row + dr, col + dc, Cell::Alive)?;
        }
        Ok(())
    }

    /// Top-left anchor that centers the pattern's bounding box
    pub const fn centered_origin(&self, rows: usize, cols: usize) -> (usize, usize) {
        (
            rows.saturating_sub(self.height) / 2,
            cols.saturating_sub(self.width) / 2,
        )
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Ten-cell symmetric seed shape; the default fixed-pattern start
    pub fn diamond() -> Pattern {
        Pattern::new(
            "Diamond",
            "Ten-cell symmetric seed",
            vec![
                (0, 2),
                (1, 1), (1, 3),
                (2, 0), (2, 1), (2, 3), (2, 4),
                (3, 1), (3, 3),
                (4, 2),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
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

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(1, 0), (1, 1), (1, 2)],
        )
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

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![diamond(), glider(), blinker(), toad(), beacon(), block()]
    }

    /// Case-insensitive lookup by name
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
