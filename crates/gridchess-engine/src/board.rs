//! Mailbox board representation.

use gridchess_core::{
    Color, Piece, PieceKind, Placement, PlacementError, Square, SquareError, BOARD_SIZE,
};
use serde::{Deserialize, Serialize};
use std::fmt;

const SIZE: usize = BOARD_SIZE as usize;

/// The 8×8 grid of optional pieces.
///
/// Cells are indexed `[row][col]`, so a square holds at most one piece by
/// construction. Evaluation code only ever reads a `Board`; the mutating
/// methods are for the game controller and for scratch copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board::default()
    }

    /// Creates a board in the standard starting position.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        board.initialize_standard();
        board
    }

    /// Creates a board from placement text.
    pub fn from_placement(text: &str) -> Result<Self, PlacementError> {
        let placement = Placement::parse(text)?;
        Ok(Board {
            cells: placement.cells,
        })
    }

    /// Converts the board to placement text.
    pub fn to_placement(&self) -> String {
        Placement { cells: self.cells }.to_text()
    }

    /// Puts every piece on its starting square.
    ///
    /// Squares outside the four starting rows are left untouched.
    pub fn initialize_standard(&mut self) {
        for color in Color::ALL {
            let back = color.back_row() as usize;
            let pawns = color.pawn_start_row() as usize;
            for col in 0..SIZE {
                self.cells[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
                self.cells[back][col] = Some(Piece::new(PieceKind::BACK_ROW[col], color));
            }
        }
    }

    /// Returns the piece on a square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Returns the piece at raw `(row, col)` coordinates.
    ///
    /// Coordinates off the board are an error, never clamped or wrapped.
    pub fn piece_at(&self, row: i32, col: i32) -> Result<Option<Piece>, SquareError> {
        Ok(self.get(Square::from_coords(row, col)?))
    }

    /// Returns true if no piece stands on the square.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Places a piece on a square, returning what was there.
    pub fn set(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].replace(piece)
    }

    /// Empties a square, returning what was there.
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Moves whatever stands on `start` to `end`, returning the piece it displaced.
    ///
    /// No legality check happens here: the destination is overwritten even if
    /// it holds a piece of the same color. An empty `start` leaves the board
    /// unchanged.
    ///
    /// `start == end` also leaves the board unchanged. Relocating and then
    /// clearing `start` literally would delete the piece; this departs from
    /// that on purpose. Under [`ClassicRules`](crate::ClassicRules) a king may
    /// "move" to its own square, and checkmate search relies on that null
    /// move keeping the king on the board (where it is still attacked).
    pub fn apply_move(&mut self, start: Square, end: Square) -> Option<Piece> {
        if start == end {
            return None;
        }
        let piece = self.clear(start)?;
        self.set(end, piece)
    }

    /// Replaces the whole board at once.
    pub fn replace(&mut self, other: Board) {
        *self = other;
    }

    /// Iterates over occupied squares in row-major order.
    pub fn occupants(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Iterates over the squares holding pieces of the given color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupants().filter(move |(_, piece)| piece.color == color)
    }

    /// Returns the first square, in row-major order, holding a king of `color`.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Returns the number of pieces on the board.
    pub fn count(&self) -> usize {
        self.occupants().count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..SIZE).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..SIZE {
                let c = self.cells[row][col].map_or('.', Piece::to_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
