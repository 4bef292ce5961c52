//! Rectangular, resizable grid of cells.

use crate::error::BoardError;
use crate::types::{Player, PlayerId, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Smallest allowed row or column count.
pub const MIN_DIMENSION: usize = 1;

/// Largest allowed row or column count. Rows are addressed by a single
/// letter and columns by a single digit, so nine is the ceiling.
pub const MAX_DIMENSION: usize = 9;

/// Grid of squares stored row by row.
///
/// Every row has the same length. Resizing only ever touches the last
/// row or column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: Vec<Vec<Square>>,
}

impl Board {
    /// Creates an empty `rows` x `cols` board.
    #[instrument]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![vec![Square::Empty; cols]; rows],
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Gets the square at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Sets the square at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, square: Square) -> Result<(), BoardError> {
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(BoardError::OutOfBounds { row, col })?;
        *cell = square;
        Ok(())
    }

    /// Checks whether `(row, col)` is on the board and unowned.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Checks whether every cell is owned.
    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|s| !s.is_empty())
    }

    /// Number of owned cells.
    pub fn occupied_count(&self) -> usize {
        self.rows.iter().flatten().filter(|s| !s.is_empty()).count()
    }

    /// Checks that all rows share one width.
    pub fn is_rectangular(&self) -> bool {
        let width = self.col_count();
        self.rows.iter().all(|r| r.len() == width)
    }

    /// Iterates `(row, col, square)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Square)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, s)| (r, c, *s)))
    }

    /// Resets every cell to unowned.
    pub fn clear(&mut self) {
        self.rows.iter_mut().flatten().for_each(|s| *s = Square::Empty);
    }

    /// Appends an empty row of the current width unless the board is
    /// already [`MAX_DIMENSION`] rows tall.
    ///
    /// Returns whether a row was added.
    #[instrument(skip(self), fields(rows = self.row_count()))]
    pub fn add_row(&mut self) -> bool {
        if self.row_count() >= MAX_DIMENSION {
            debug!("Board already at maximum height");
            return false;
        }
        let width = self.col_count();
        self.rows.push(vec![Square::Empty; width]);
        true
    }

    /// Appends an empty cell to every row unless the board is already
    /// [`MAX_DIMENSION`] columns wide.
    ///
    /// Returns whether a column was added.
    #[instrument(skip(self), fields(cols = self.col_count()))]
    pub fn add_column(&mut self) -> bool {
        if self.col_count() >= MAX_DIMENSION {
            debug!("Board already at maximum width");
            return false;
        }
        self.rows.iter_mut().for_each(|r| r.push(Square::Empty));
        true
    }

    /// Removes the last row if it is entirely unowned and not the only row.
    ///
    /// Returns whether a row was removed.
    #[instrument(skip(self), fields(rows = self.row_count()))]
    pub fn remove_row(&mut self) -> bool {
        if self.row_count() <= MIN_DIMENSION {
            debug!("Refusing to remove the only row");
            return false;
        }
        let edge_empty = self
            .rows
            .last()
            .is_some_and(|r| r.iter().all(|s| s.is_empty()));
        if !edge_empty {
            debug!("Last row is occupied, not removing");
            return false;
        }
        self.rows.pop();
        true
    }

    /// Removes the last column if it is entirely unowned and not the only column.
    ///
    /// Returns whether a column was removed.
    #[instrument(skip(self), fields(cols = self.col_count()))]
    pub fn remove_column(&mut self) -> bool {
        if self.col_count() <= MIN_DIMENSION {
            debug!("Refusing to remove the only column");
            return false;
        }
        let edge_empty = self
            .rows
            .iter()
            .all(|r| r.last().is_none_or(|s| s.is_empty()));
        if !edge_empty {
            debug!("Last column is occupied, not removing");
            return false;
        }
        self.rows.iter_mut().for_each(|r| {
            r.pop();
        });
        true
    }

    /// Formats the board with column numbers across the top and row
    /// letters down the side. Empty cells show as `.`.
    pub fn render(&self, players: &[Player]) -> String {
        let symbol_of = |id: PlayerId| players.get(id.index()).map_or('?', Player::symbol);

        let mut out = String::from(" ");
        for c in 0..self.col_count() {
            out.push_str(&format!(" {}", c + 1));
        }
        for (r, row) in self.rows.iter().enumerate() {
            out.push('\n');
            out.push(row_letter(r));
            for square in row {
                out.push(' ');
                out.push(square.owner().map_or('.', symbol_of));
            }
        }
        out
    }
}

fn row_letter(row: usize) -> char {
    (b'a' + (row % 26) as u8) as char
}
