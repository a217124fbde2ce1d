//! Check and checkmate analysis.
//!
//! Everything here is generic over a [`RuleSet`]: a king is attacked when an
//! enemy piece could legally move onto its square under those rules, and an
//! escape is any legal move after which that is no longer true.

use crate::rules::RuleSet;
use crate::Board;
use gridchess_core::{Color, Move, Square};
use std::fmt;

/// How a position looks to one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The king is not attacked (or there is no king).
    Normal,
    /// The king is attacked and at least one move lifts the attack.
    Check,
    /// The king is attacked and nothing lifts the attack.
    Checkmate,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Normal => write!(f, "normal"),
            Status::Check => write!(f, "check"),
            Status::Checkmate => write!(f, "checkmate"),
        }
    }
}

/// Returns the squares of every enemy piece attacking the king of `color`.
///
/// Empty when `color` has no king on the board.
pub fn attackers<R: RuleSet + ?Sized>(rules: &R, board: &Board, color: Color) -> Vec<Square> {
    let Some(king) = board.find_king(color) else {
        return Vec::new();
    };
    board
        .pieces_of(color.opposite())
        .filter(|&(from, piece)| rules.is_legal_move(piece, from, king, board))
        .map(|(from, _)| from)
        .collect()
}

/// Returns true if the king of `color` is attacked.
///
/// The king is the first one found scanning rows from 0 upward. A board with
/// no king of that color is never in check.
pub fn is_in_check<R: RuleSet + ?Sized>(rules: &R, board: &Board, color: Color) -> bool {
    let Some(king) = board.find_king(color) else {
        return false;
    };
    board
        .pieces_of(color.opposite())
        .any(|(from, piece)| rules.is_legal_move(piece, from, king, board))
}

/// Returns the first move of `color` that leaves its king unattacked.
///
/// Every candidate is played on its own copy of the board, so `board` itself
/// is never touched. A move that lands on the side's own king is not an
/// escape: the trial board has no king left to be attacked.
pub fn find_escape<R: RuleSet + ?Sized>(rules: &R, board: &Board, color: Color) -> Option<Move> {
    let has_king = board.find_king(color).is_some();
    for (from, piece) in board.pieces_of(color) {
        for to in Square::all() {
            if !rules.is_legal_move(piece, from, to, board) {
                continue;
            }
            let mut trial = *board;
            trial.apply_move(from, to);
            if has_king && trial.find_king(color).is_none() {
                continue;
            }
            if !is_in_check(rules, &trial, color) {
                return Some(Move::new(from, to));
            }
        }
    }
    None
}

/// Returns true if `color` is in check and has no escape.
pub fn is_in_checkmate<R: RuleSet + ?Sized>(rules: &R, board: &Board, color: Color) -> bool {
    if !is_in_check(rules, board, color) {
        return false;
    }
    match find_escape(rules, board, color) {
        Some(escape) => {
            tracing::trace!(%color, %escape, "check can be escaped");
            false
        }
        None => true,
    }
}

/// Classifies the position for `color`.
pub fn status<R: RuleSet + ?Sized>(rules: &R, board: &Board, color: Color) -> Status {
    if !is_in_check(rules, board, color) {
        Status::Normal
    } else if find_escape(rules, board, color).is_some() {
        Status::Check
    } else {
        Status::Checkmate
    }
}
