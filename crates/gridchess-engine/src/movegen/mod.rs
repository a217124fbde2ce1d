//! Per-kind movement rules.
//!
//! Each function answers one question: may this piece, standing on `start`,
//! go to `end` on this board? The rules are geometric plus the occupancy
//! checks listed on each function; they never look at whose turn it is or at
//! the safety of the mover's own king.
//!
//! White pawns advance toward higher rows and Black pawns toward lower
//! rows.

mod paths;

pub use paths::{is_clear_path, squares_between};

use crate::Board;
use gridchess_core::{Piece, PieceKind, Square};

/// Returns true if `piece` may move from `start` to `end`.
///
/// Dispatches on the piece kind. These are the classic rules: their known
/// gaps (sliders and kings landing on their own pieces, the unguarded pawn
/// double step, the king's null move) are kept as-is. See
/// [`StrictRules`](crate::StrictRules) for the variant that closes them.
pub fn is_legal_move(piece: Piece, start: Square, end: Square, board: &Board) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_move(piece, start, end, board),
        PieceKind::Rook => rook_move(start, end, board),
        PieceKind::Knight => knight_move(piece, start, end, board),
        PieceKind::Bishop => bishop_move(start, end, board),
        PieceKind::Queen => queen_move(start, end, board),
        PieceKind::King => king_move(start, end),
    }
}

/// Returns true if the occupant of `start` may move to `end`.
///
/// An empty `start` is simply not a legal move.
pub fn is_legal(board: &Board, start: Square, end: Square) -> bool {
    board
        .get(start)
        .is_some_and(|piece| is_legal_move(piece, start, end, board))
}

#[inline]
fn deltas(start: Square, end: Square) -> (i8, i8) {
    (
        end.row() as i8 - start.row() as i8,
        end.col() as i8 - start.col() as i8,
    )
}

/// Pawn rule.
///
/// - one step forward onto an empty square;
/// - two steps forward from the starting row onto an empty square (the
///   square jumped over is not inspected, and a pawn that returned to its
///   starting row may double step again);
/// - one step diagonally forward onto an enemy piece.
pub fn pawn_move(pawn: Piece, start: Square, end: Square, board: &Board) -> bool {
    let forward = pawn.color.pawn_direction();
    let (d_row, d_col) = deltas(start, end);
    let target = board.get(end);

    if d_col == 0 && d_row == forward {
        return target.is_none();
    }
    if d_col == 0 && d_row == 2 * forward && start.row() == pawn.color.pawn_start_row() {
        return target.is_none();
    }
    if d_col.abs() == 1 && d_row == forward {
        return target.is_some_and(|t| t.is_enemy_of(pawn));
    }
    false
}

/// Rook rule: along a row or a column with nothing strictly in between.
///
/// The destination is not inspected, so a rook may land on its own piece.
pub fn rook_move(start: Square, end: Square, board: &Board) -> bool {
    (start.row() == end.row() || start.col() == end.col()) && is_clear_path(board, start, end)
}

/// Knight rule: a (2, 1) or (1, 2) jump onto an empty or enemy square.
pub fn knight_move(knight: Piece, start: Square, end: Square, board: &Board) -> bool {
    let (d_row, d_col) = deltas(start, end);
    let jump = matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2));
    jump && board.get(end).map_or(true, |t| t.is_enemy_of(knight))
}

/// Bishop rule: along a diagonal with nothing strictly in between.
///
/// Like the rook, the destination is not inspected.
pub fn bishop_move(start: Square, end: Square, board: &Board) -> bool {
    let (d_row, d_col) = deltas(start, end);
    d_row.abs() == d_col.abs() && is_clear_path(board, start, end)
}

/// Queen rule: anything a rook or a bishop could do from `start`.
pub fn queen_move(start: Square, end: Square, board: &Board) -> bool {
    rook_move(start, end, board) || bishop_move(start, end, board)
}

/// King rule: any square at most one row and one column away.
///
/// Staying put counts, and neither the destination nor the king's safety is
/// inspected.
pub fn king_move(start: Square, end: Square) -> bool {
    let (d_row, d_col) = deltas(start, end);
    d_row.abs() <= 1 && d_col.abs() <= 1
}
