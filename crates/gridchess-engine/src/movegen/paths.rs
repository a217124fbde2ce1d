//! Walking the squares between two points on a line.

use crate::Board;
use gridchess_core::Square;

/// Iterates over the squares strictly between `start` and `end`.
///
/// Steps one square at a time toward `end` along each axis, so the result is
/// only meaningful when the two squares share a row, a column or a diagonal.
/// Equal or adjacent squares have nothing in between.
pub fn squares_between(start: Square, end: Square) -> impl Iterator<Item = Square> {
    let d_row = end.row() as i8 - start.row() as i8;
    let d_col = end.col() as i8 - start.col() as i8;
    let steps = d_row.abs().max(d_col.abs());
    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    (1..steps).filter_map(move |i| start.offset(step_row * i, step_col * i))
}

/// Returns true if every square strictly between `start` and `end` is empty.
pub fn is_clear_path(board: &Board, start: Square, end: Square) -> bool {
    squares_between(start, end).all(|sq| board.is_empty(sq))
}
