//! The permissive default rule set.

use super::RuleSet;
use crate::movegen;
use crate::Board;
use gridchess_core::{Piece, Square};

/// The permissive per-kind movement rules.
///
/// Rooks, bishops, queens and kings may land on a piece of their own color,
/// the king may "move" to its own square, and the pawn double step does not
/// look at the square it jumps over. Check and checkmate are evaluated with
/// these same rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicRules;

impl RuleSet for ClassicRules {
    fn name(&self) -> &'static str {
        "classic"
    }

    fn is_legal_move(&self, piece: Piece, start: Square, end: Square, board: &Board) -> bool {
        movegen::is_legal_move(piece, start, end, board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridchess_core::{Color, PieceKind};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn double_step_over_a_blocker_is_allowed() {
        let mut board = Board::empty();
        board.set(sq("d2"), Piece::new(PieceKind::Pawn, Color::White));
        assert!(ClassicRules.is_legal(&board, sq("d2"), sq("d4")));

        board.set(sq("d3"), Piece::new(PieceKind::Knight, Color::Black));
        assert!(ClassicRules.is_legal(&board, sq("d2"), sq("d4")));
    }

    #[test]
    fn king_null_move_is_allowed() {
        let mut board = Board::empty();
        board.set(sq("e1"), Piece::new(PieceKind::King, Color::White));
        assert!(ClassicRules.is_legal(&board, sq("e1"), sq("e1")));
    }

    #[test]
    fn king_may_take_own_piece() {
        let board = Board::standard();
        assert!(ClassicRules.is_legal(&board, sq("e1"), sq("d1")));
    }
}
