//! Board coordinate representation.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a position from algebraic notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePositionError {
    #[error("invalid square: expected 2 characters, got {0:?}")]
    InvalidLength(String),

    #[error("invalid file '{0}': expected 'a'-'h'")]
    InvalidFile(char),

    #[error("invalid rank '{0}': expected '1'-'8'")]
    InvalidRank(char),
}

/// A square on the board as a `(row, col)` pair.
///
/// Row 0 is the far (Black) side and row 7 the near (White) side; column 0
/// is the a-file. A `Position` is always on the board: every constructor
/// checks bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position, or `None` if either coordinate is outside 0-7.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Position { row, col })
        } else {
            None
        }
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the position shifted by the given deltas, if still on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Position::new(row as u8, col as u8)
    }

    /// Iterates over all 64 squares in row-major order, top-left first.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Position { row, col }))
    }

    /// Returns the algebraic notation for this position (e.g. "e4").
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        format!("{}{}", file, rank)
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(ParsePositionError::InvalidLength(s.to_string())),
        };

        let col = match file.to_ascii_lowercase() {
            c @ 'a'..='h' => c as u8 - b'a',
            _ => return Err(ParsePositionError::InvalidFile(file)),
        };
        let row = match rank {
            c @ '1'..='8' => b'8' - c as u8,
            _ => return Err(ParsePositionError::InvalidRank(rank)),
        };

        Ok(Position { row, col })
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_algebraic())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
