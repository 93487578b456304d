//! Guess history grid
//!
//! A fixed `rows x cols` board of [`Letter`] cells. Row `r` holds the scored
//! letters of the guess submitted for that row.

use std::fmt;

use super::letter::{Letter, Status};
use crate::error::{GameError, Result};

/// Fixed-size matrix of letter cells
///
/// Cells are stored row-major. The dimensions are chosen at construction and
/// never change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Box<[Letter]>,
}

impl Grid {
    /// Create a grid with every cell `('_', NotGuessed)`
    ///
    /// # Errors
    /// Returns [`GameError::InvalidDimensions`] if `rows` or `cols` is zero.
    ///
    /// # Examples
    /// ```
    /// use wolfle::core::{Grid, Status};
    ///
    /// let grid = Grid::new(6, 5).unwrap();
    /// assert_eq!(grid.character_at(5, 4).unwrap(), '_');
    /// assert_eq!(grid.status_at(0, 0).unwrap(), Status::NotGuessed);
    /// assert!(grid.status_at(6, 0).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![Letter::default(); rows * cols].into_boxed_slice(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// The cells of one row, left to right
    ///
    /// # Errors
    /// Returns [`GameError::InvalidRow`] if `row >= rows`.
    pub fn row(&self, row: usize) -> Result<&[Letter]> {
        if row >= self.rows {
            return Err(GameError::InvalidRow {
                row,
                rows: self.rows,
            });
        }
        let start = row * self.cols;
        Ok(&self.cells[start..start + self.cols])
    }

    /// Iterate over all rows, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Letter]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Character stored at `(row, col)`
    ///
    /// # Errors
    /// Returns [`GameError::InvalidCoordinates`] if the cell is outside the grid.
    pub fn character_at(&self, row: usize, col: usize) -> Result<char> {
        self.offset(row, col).map(|i| self.cells[i].character())
    }

    /// Status stored at `(row, col)`
    ///
    /// # Errors
    /// Returns [`GameError::InvalidCoordinates`] if the cell is outside the grid.
    pub fn status_at(&self, row: usize, col: usize) -> Result<Status> {
        self.offset(row, col).map(|i| self.cells[i].status())
    }

    /// Overwrite the cell at `(row, col)`
    ///
    /// Unlike [`Alphabet::update_status`](super::Alphabet::update_status)
    /// there is no merging: the last write wins.
    ///
    /// # Errors
    /// Returns [`GameError::InvalidCoordinates`] if the cell is outside the
    /// grid, or [`GameError::InvalidCharacter`] if `character` is not `A`-`Z`
    /// or `_`. The cell is unchanged on error.
    pub fn update_cell(
        &mut self,
        row: usize,
        col: usize,
        character: char,
        status: Status,
    ) -> Result<()> {
        let index = self.offset(row, col)?;
        self.cells[index] = Letter::with_status(character, status)?;
        Ok(())
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(GameError::InvalidCoordinates {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for letter in row {
                write!(f, "|{letter}")?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
