//! Parsing of two-character cell identifiers such as `a1` or `C3`.

use crate::error::MoveError;
use crate::types::Axis;
use tracing::instrument;

/// Unresolved cell identifier: a row letter and a column digit.
///
/// Parsing checks only the shape of the text. Bounds are checked by
/// [`CellRef::resolve`] against a concrete board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    row: usize,
    column: usize,
}

impl CellRef {
    /// Parses a command, checking length, then the row character, then the
    /// column character.
    ///
    /// The row letter is case-insensitive (`a` and `A` are row 0). The
    /// column digit is kept as typed, so `0` parses and is rejected later
    /// by [`CellRef::resolve`].
    ///
    /// # Errors
    ///
    /// - `InvalidIdentifierLength` if the command is not two characters
    /// - `InvalidIdentifierCharacter` on the row axis for a non-letter
    /// - `InvalidIdentifierCharacter` on the column axis for a non-digit
    #[instrument]
    pub fn parse(command: &str) -> Result<Self, MoveError> {
        let chars: Vec<char> = command.chars().collect();
        let &[row_char, col_char] = chars.as_slice() else {
            return Err(MoveError::InvalidIdentifierLength {
                length: chars.len(),
            });
        };

        if !row_char.is_ascii_alphabetic() {
            return Err(MoveError::InvalidIdentifierCharacter {
                axis: Axis::Row,
                character: row_char,
            });
        }

        let Some(column) = col_char.to_digit(10) else {
            return Err(MoveError::InvalidIdentifierCharacter {
                axis: Axis::Column,
                character: col_char,
            });
        };

        let row = (row_char.to_ascii_lowercase() as u8 - b'a') as usize;
        Ok(Self {
            row,
            column: column as usize,
        })
    }

    /// Zero-based row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// One-based column number as typed.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Converts to zero-based `(row, col)` on a `rows` x `cols` board.
    ///
    /// # Errors
    ///
    /// `OutsideCellRange` for the row (reporting the zero-based index) is
    /// checked before the column (reporting the one-based number typed).
    #[instrument]
    pub fn resolve(self, rows: usize, cols: usize) -> Result<(usize, usize), MoveError> {
        if self.row >= rows {
            return Err(MoveError::OutsideCellRange {
                axis: Axis::Row,
                index: self.row,
            });
        }
        if self.column == 0 || self.column > cols {
            return Err(MoveError::OutsideCellRange {
                axis: Axis::Column,
                index: self.column,
            });
        }
        Ok((self.row, self.column - 1))
    }
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.row as u8) as char, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(CellRef::parse("a1"), CellRef::parse("A1"));
        let cell = CellRef::parse("C3").unwrap();
        assert_eq!((cell.row(), cell.column()), (2, 3));
        assert_eq!(cell.to_string(), "c3");
    }

    #[test]
    fn test_length_checked_first() {
        for cmd in ["", "a", "abc123", "!!!"] {
            assert!(matches!(
                CellRef::parse(cmd),
                Err(MoveError::InvalidIdentifierLength { .. })
            ));
        }
        assert_eq!(
            CellRef::parse("abc123"),
            Err(MoveError::InvalidIdentifierLength { length: 6 })
        );
    }

    #[test]
    fn test_row_character_checked_before_column() {
        assert_eq!(
            CellRef::parse("2!"),
            Err(MoveError::InvalidIdentifierCharacter {
                axis: Axis::Row,
                character: '2'
            })
        );
        assert_eq!(
            CellRef::parse(" 2"),
            Err(MoveError::InvalidIdentifierCharacter {
                axis: Axis::Row,
                character: ' '
            })
        );
    }

    #[test]
    fn test_column_character() {
        for (cmd, bad) in [("aa", 'a'), ("a@", '@'), ("a ", ' ')] {
            assert_eq!(
                CellRef::parse(cmd),
                Err(MoveError::InvalidIdentifierCharacter {
                    axis: Axis::Column,
                    character: bad
                })
            );
        }
    }

    #[test]
    fn test_non_ascii_counts_as_one_character() {
        assert_eq!(
            CellRef::parse("é1"),
            Err(MoveError::InvalidIdentifierCharacter {
                axis: Axis::Row,
                character: 'é'
            })
        );
    }

    #[test]
    fn test_resolve_bounds() {
        let resolve = |cmd: &str| CellRef::parse(cmd).and_then(|c| c.resolve(3, 3));
        assert_eq!(resolve("b2"), Ok((1, 1)));
        assert_eq!(
            resolve("d1"),
            Err(MoveError::OutsideCellRange {
                axis: Axis::Row,
                index: 3
            })
        );
        assert_eq!(
            resolve("a0"),
            Err(MoveError::OutsideCellRange {
                axis: Axis::Column,
                index: 0
            })
        );
        assert_eq!(
            resolve("a4"),
            Err(MoveError::OutsideCellRange {
                axis: Axis::Column,
                index: 4
            })
        );
        // Row is reported even when the column is also out of range.
        assert!(matches!(
            resolve("z9"),
            Err(MoveError::OutsideCellRange { axis: Axis::Row, .. })
        ));
    }
}
