//! Rules engine for chess on an 8×8 mailbox board.
//!
//! This crate provides:
//! - [`Board`] - the grid of optional pieces and its single mutation, [`Board::apply_move`]
//! - [`movegen`] - the per-kind movement rules
//! - [`RuleSet`] - trait over rule variants, with [`ClassicRules`] and [`StrictRules`]
//! - [`check`] - check and checkmate analysis generic over the rule set
//! - [`Game`] - an owned game context for interactive hosts
//! - [`persist`] - JSON save files
//!
//! There is no castling, en passant, promotion, draw detection or move
//! history.
//!
//! # Example
//!
//! ```
//! use gridchess_engine::{Board, ClassicRules, Game, RuleSet, Status};
//! use gridchess_core::Color;
//!
//! // Using the rules directly against a board
//! let mut board = Board::standard();
//! let (e2, e4) = ("e2".parse().unwrap(), "e4".parse().unwrap());
//! if ClassicRules.is_legal(&board, e2, e4) {
//!     board.apply_move(e2, e4);
//! }
//! assert!(!ClassicRules.is_in_check(&board, Color::Black));
//!
//! // Using Game for validation and reporting
//! let mut game = Game::new();
//! let outcome = game.play(e2, e4).unwrap();
//! assert_eq!(outcome.opponent, Status::Normal);
//! ```

mod board;
pub mod check;
mod game;
pub mod movegen;
pub mod persist;
pub mod rules;

pub use board::Board;
pub use check::{attackers, find_escape, is_in_check, is_in_checkmate, Status};
pub use game::{Click, Game, GameError, MoveOutcome};
pub use movegen::{is_legal, is_legal_move};
pub use persist::{load_game, save_game, PersistError, SavedGame};
pub use rules::{ClassicRules, RuleSet, Rules, StrictRules};
