//! Board square representation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when parsing a square from algebraic notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSquareError {
    /// The input was not exactly two characters long.
    #[error("expected two characters (like \"e4\"), got {0}")]
    InvalidLength(usize),
    /// The file character was not in 'a'-'h'.
    #[error("invalid file character {0:?} (expected 'a'-'h')")]
    InvalidFile(char),
    /// The rank character was not in '1'-'8'.
    #[error("invalid rank character {0:?} (expected '1'-'8')")]
    InvalidRank(char),
}

/// A square on the 8x8 board.
///
/// A square is a `(row, column)` pair, each in `[0, 8)`. Row 0 is Black's
/// back row and row 7 is White's, so White advances toward smaller row
/// indices. Columns run left to right from White's point of view, column 0
/// being the a-file. In algebraic notation row 7 is rank 1 and row 0 is
/// rank 8.
///
/// Construction and offset arithmetic are checked; a `Square` that exists
/// is always on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from row and column indices.
    ///
    /// Returns `None` if either index is outside `[0, 8)`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Returns the row index (0-7, row 0 is Black's back row).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-7, column 0 is the a-file).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square displaced by `(dr, dc)`, or `None` if that
    /// lands off the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterates over all 64 squares in row-major order (row 0 first).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square { row, col }))
    }

    /// Returns the algebraic notation for this square (e.g., "e4").
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        format!("{}{}", file, rank)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseSquareError::InvalidLength(bytes.len()));
        }
        let col = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            other => return Err(ParseSquareError::InvalidFile(other as char)),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => b'8' - bytes[1],
            other => return Err(ParseSquareError::InvalidRank(other as char)),
        };
        Ok(Square { row, col })
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
