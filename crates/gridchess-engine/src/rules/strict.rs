//! A rule set that closes the per-piece gaps of the classic rules.

use super::RuleSet;
use crate::movegen;
use crate::Board;
use gridchess_core::{Move, Piece, PieceKind, Square};

/// Movement rules with the classic gaps closed.
///
/// On top of [`ClassicRules`](super::ClassicRules):
/// - no piece may stay on its own square;
/// - no piece may land on a piece of its own color;
/// - the pawn double step needs the square it passes over to be empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictRules;

impl RuleSet for StrictRules {
    fn name(&self) -> &'static str {
        "strict"
    }

    fn is_legal_move(&self, piece: Piece, start: Square, end: Square, board: &Board) -> bool {
        let mv = Move::new(start, end);
        if mv.is_null() {
            return false;
        }
        if board.get(end).is_some_and(|t| !t.is_enemy_of(piece)) {
            return false;
        }
        if piece.kind == PieceKind::Pawn && mv.distance() == (2, 0) {
            let passed = start.offset(piece.color.pawn_direction(), 0);
            if !passed.is_some_and(|sq| board.is_empty(sq)) {
                return false;
            }
        }
        movegen::is_legal_move(piece, start, end, board)
    }
}
