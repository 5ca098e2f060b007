use super::Cell;
use rayon::prelude::*;
use thiserror::Error;

/// Default number of rows of the playing field
pub const DEFAULT_ROWS: usize = 15;
/// Default number of columns of the playing field
pub const DEFAULT_COLUMNS: usize = 15;

/// Moore neighborhood offsets as (row, column) deltas.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Grid manages the 2D cellular automaton field.
/// Dimensions are fixed at construction; edges do not wrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Build a grid with the listed (row, col) cells alive
    pub fn from_alive_cells(
        rows: usize,
        cols: usize,
        alive: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols);
        for (row, col) in alive {
            grid.set(row, col, Cell::Alive)?;
        }
        Ok(grid)
    }

    /// Get grid dimensions as (rows, columns)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells
    pub const fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.cols {
            Ok(self.index(row, col))
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get cell at position
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        self.check_bounds(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position. Only used while building an initial state.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.check_bounds(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Liveness lookup that treats anything beyond the edge as dead
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_ok_and(Cell::is_alive)
    }

    /// Count live cells among the up-to-8 Moore neighbors.
    /// Each offset is guarded individually; nothing wraps around the edges.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr).filter(|&r| r < self.rows)?;
                let c = col.checked_add_signed(dc).filter(|&c| c < self.cols)?;
                Some(self.cells[self.index(r, c)])
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_cell(&self, row: usize, col: usize) -> Cell {
        let current = self.cells[self.index(row, col)];
        current.evolve(self.count_live_neighbors(row, col))
    }

    /// Pure functional evolution - returns new grid (serial).
    /// Reads only `self`, so every cell sees the previous generation.
    pub fn evolve(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_cell(row, col))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Parallel evolution using rayon, one task per row.
    /// Produces exactly the same grid as [`Grid::evolve`].
    pub fn evolve_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.rows)
            .into_par_iter()
            .flat_map_iter(|row| (0..self.cols).map(move |col| self.next_cell(row, col)))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their (row, col) positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Iterate over rows as slices, top to bottom
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks() panics on 0, and a zero-width grid has no cells anyway
        self.cells.chunks(self.cols.max(1))
    }
}
