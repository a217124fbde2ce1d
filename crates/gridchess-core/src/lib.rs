//! Core types for gridchess.
//!
//! This crate provides the value types shared by the rules engine and its hosts:
//! - [`Color`], [`PieceKind`] and [`Piece`] for piece representation
//! - [`Square`] for `(row, column)` board coordinates
//! - [`Move`] for coordinate-notation moves
//! - Placement text parsing and serialization

mod color;
mod mov;
mod piece;
mod placement;
mod square;

pub use color::Color;
pub use mov::{Move, MoveParseError};
pub use piece::{Piece, PieceKind};
pub use placement::{Placement, PlacementError};
pub use square::{Square, SquareError, BOARD_SIZE};
