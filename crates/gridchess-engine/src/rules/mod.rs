//! Rule set abstraction.
//!
//! The [`RuleSet`] trait decides single-move legality. Check and checkmate
//! analysis is written once in [`crate::check`] and provided to every rule
//! set through default methods, so a variant only has to say which moves its
//! pieces may make.

mod classic;
mod strict;

pub use classic::ClassicRules;
pub use strict::StrictRules;

use crate::check::{self, Status};
use crate::Board;
use gridchess_core::{Color, Move, Piece, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trait for the movement rules of a variant.
///
/// # Example
///
/// ```
/// use gridchess_engine::{Board, ClassicRules, RuleSet};
/// use gridchess_core::Color;
///
/// let board = Board::standard();
/// assert!(ClassicRules.is_legal(&board, "e2".parse().unwrap(), "e4".parse().unwrap()));
/// assert!(!ClassicRules.is_in_check(&board, Color::White));
/// ```
pub trait RuleSet {
    /// Short lowercase name of the rule set.
    fn name(&self) -> &'static str;

    /// Returns true if `piece`, standing on `start`, may move to `end`.
    fn is_legal_move(&self, piece: Piece, start: Square, end: Square, board: &Board) -> bool;

    /// Returns true if the occupant of `start` may move to `end`.
    ///
    /// An empty `start` is never legal.
    fn is_legal(&self, board: &Board, start: Square, end: Square) -> bool {
        board
            .get(start)
            .is_some_and(|piece| self.is_legal_move(piece, start, end, board))
    }

    /// Returns every square the occupant of `from` may move to.
    fn legal_destinations(&self, board: &Board, from: Square) -> Vec<Square> {
        match board.get(from) {
            Some(piece) => Square::all()
                .filter(|&to| self.is_legal_move(piece, from, to, board))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Returns every legal move for the pieces of `color`.
    fn legal_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        board
            .pieces_of(color)
            .flat_map(|(from, _)| {
                self.legal_destinations(board, from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Returns true if the king of `color` is attacked.
    fn is_in_check(&self, board: &Board, color: Color) -> bool {
        check::is_in_check(self, board, color)
    }

    /// Returns true if `color` is in check and no move lifts it.
    fn is_in_checkmate(&self, board: &Board, color: Color) -> bool {
        check::is_in_checkmate(self, board, color)
    }

    /// Classifies the position from the point of view of `color`.
    fn status(&self, board: &Board, color: Color) -> Status {
        check::status(self, board, color)
    }
}

/// A rule set chosen at runtime, e.g. from a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rules {
    /// See [`ClassicRules`].
    #[default]
    Classic,
    /// See [`StrictRules`].
    Strict,
}

impl RuleSet for Rules {
    fn name(&self) -> &'static str {
        match self {
            Rules::Classic => ClassicRules.name(),
            Rules::Strict => StrictRules.name(),
        }
    }

    fn is_legal_move(&self, piece: Piece, start: Square, end: Square, board: &Board) -> bool {
        match self {
            Rules::Classic => ClassicRules.is_legal_move(piece, start, end, board),
            Rules::Strict => StrictRules.is_legal_move(piece, start, end, board),
        }
    }
}

impl FromStr for Rules {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Rules::Classic),
            "strict" => Ok(Rules::Strict),
            other => Err(format!(
                "unknown rule set '{}', expected 'classic' or 'strict'",
                other
            )),
        }
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
