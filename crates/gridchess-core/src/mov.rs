//! Move representation.

use crate::{Square, SquareError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing coordinate notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("expected two squares such as 'e2e4', got '{0}'")]
    BadShape(String),

    #[error(transparent)]
    Square(#[from] SquareError),
}

/// A move from one square to another.
///
/// Carries no flags: the engine has no castling, en passant or promotion.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns true if source and destination coincide.
    #[inline]
    pub fn is_null(self) -> bool {
        self.from == self.to
    }

    /// Returns the row and column distance covered, as absolute values.
    #[inline]
    pub fn distance(self) -> (u8, u8) {
        (
            self.from.row().abs_diff(self.to.row()),
            self.from.col().abs_diff(self.to.col()),
        )
    }

    /// Returns the coordinate notation for this move (e.g. `"e2e4"`).
    pub fn to_notation(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses coordinate notation.
    ///
    /// Accepts `e2e4`, `e2 e4` and `e2-e4`.
    pub fn parse(s: &str) -> Result<Self, MoveParseError> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        if compact.len() != 4 || !compact.is_ascii() {
            return Err(MoveParseError::BadShape(s.to_string()));
        }
        let from: Square = compact[0..2].parse()?;
        let to: Square = compact[2..4].parse()?;
        Ok(Move::new(from, to))
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
