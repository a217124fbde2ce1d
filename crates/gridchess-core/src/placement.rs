//! Placement text: a one-line description of every square on the board.
//!
//! The format is the piece-placement field of FEN. Rows are listed from row 7
//! down to row 0, separated by `/`; within a row, columns run 0 to 7. Pieces
//! are letters (`PNBRQK` for White, `pnbrqk` for Black) and a digit stands for
//! that many empty squares.

use crate::{Piece, BOARD_SIZE};
use thiserror::Error;

const SIZE: usize = BOARD_SIZE as usize;

/// Errors that can occur when parsing placement text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { ch: char, row: usize },

    #[error("row {row} has {squares} squares, expected 8")]
    InvalidRowLength { row: usize, squares: usize },
}

/// Parsed placement: the occupant of each cell, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub cells: [[Option<Piece>; SIZE]; SIZE],
}

impl Placement {
    /// The standard starting placement.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// The placement with no pieces at all.
    pub const EMPTY: &'static str = "8/8/8/8/8/8/8/8";

    /// Parses placement text.
    pub fn parse(text: &str) -> Result<Self, PlacementError> {
        let rows: Vec<&str> = text.trim().split('/').collect();
        if rows.len() != SIZE {
            return Err(PlacementError::InvalidRowCount(rows.len()));
        }

        let mut placement = Placement::default();
        for (i, row_text) in rows.iter().enumerate() {
            let row = SIZE - 1 - i;
            let mut col = 0usize;
            for ch in row_text.chars() {
                if let Some(run) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += run as usize;
                } else if let Some(piece) = Piece::from_char(ch) {
                    if col < SIZE {
                        placement.cells[row][col] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(PlacementError::InvalidCharacter { ch, row });
                }
                if col > SIZE {
                    break;
                }
            }
            if col != SIZE {
                return Err(PlacementError::InvalidRowLength { row, squares: col });
            }
        }

        Ok(placement)
    }

    /// Converts the placement back to text.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in (0..SIZE).rev() {
            let mut empty = 0;
            for cell in &self.cells[row] {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row > 0 {
                out.push('/');
            }
        }
        out
    }
}
