//! Game management for an interactive host.
//!
//! The [`Game`] struct is the one owned context a host needs: it holds the
//! live board and the rule set, tracks a pending square selection for
//! click-click input, validates moves before applying them, reports check and
//! checkmate after each move, and saves or restores the whole board.

use crate::check::Status;
use crate::persist::{self, PersistError, SavedGame};
use crate::rules::{ClassicRules, RuleSet};
use crate::Board;
use gridchess_core::{Color, Move, Piece, Square};
use std::path::Path;
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// There is no piece on the source square.
    #[error("no piece on {0}")]
    EmptySource(Square),
    /// The piece on the source square may not make this move.
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    /// Turn order is enforced and the piece belongs to the other side.
    #[error("it is {expected}'s turn, the piece on {square} is {found}'s")]
    WrongTurn {
        square: Square,
        expected: Color,
        found: Color,
    },
}

/// What happened when a move was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move.
    pub mv: Move,
    /// The piece that moved.
    pub piece: Piece,
    /// The piece that stood on the destination, if any.
    pub captured: Option<Piece>,
    /// The position as seen by the side that moved.
    pub mover: Status,
    /// The position as seen by the other side.
    pub opponent: Status,
}

/// Result of a square selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    /// The square is now selected and waits for a destination.
    Selected(Square),
    /// The selection and this square formed a move that was played.
    Moved(MoveOutcome),
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game<R = ClassicRules> {
    board: Board,
    rules: R,
    selected: Option<Square>,
    to_move: Color,
    enforce_turns: bool,
}

impl Default for Game<ClassicRules> {
    fn default() -> Self {
        Self::new()
    }
}

impl Game<ClassicRules> {
    /// Creates a game in the standard starting position with the classic rules.
    pub fn new() -> Self {
        Self::with_rules(ClassicRules)
    }
}

impl<R: RuleSet> Game<R> {
    /// Creates a game in the standard starting position.
    pub fn with_rules(rules: R) -> Self {
        Self::from_board(Board::standard(), rules)
    }

    /// Creates a game from any board, White to move.
    pub fn from_board(board: Board, rules: R) -> Self {
        Game {
            board,
            rules,
            selected: None,
            to_move: Color::White,
            enforce_turns: false,
        }
    }

    /// Turns turn-order enforcement on or off.
    ///
    /// Off by default: either side may move at any time.
    pub fn enforce_turns(mut self, enforce: bool) -> Self {
        self.enforce_turns = enforce;
        self
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the pending selection.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Returns the side expected to move next.
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Returns true if turn order is enforced.
    pub fn turns_enforced(&self) -> bool {
        self.enforce_turns
    }

    /// Returns every square the piece on `from` may move to.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        self.rules.legal_destinations(&self.board, from)
    }

    /// Classifies the current position for `color`.
    pub fn status(&self, color: Color) -> Status {
        self.rules.status(&self.board, color)
    }

    /// Handles one square selection.
    ///
    /// The first call remembers the square. The second call tries to move
    /// from the remembered square to this one and forgets the selection
    /// whether or not the move was legal.
    pub fn select(&mut self, sq: Square) -> Result<Click, GameError> {
        match self.selected.take() {
            None => {
                self.selected = Some(sq);
                Ok(Click::Selected(sq))
            }
            Some(from) => self.play(from, sq).map(Click::Moved),
        }
    }

    /// Drops the pending selection.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Validates and plays a move.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveOutcome, GameError> {
        let mv = Move::new(from, to);
        let piece = self.board.get(from).ok_or(GameError::EmptySource(from))?;

        if self.enforce_turns && piece.color != self.to_move {
            return Err(GameError::WrongTurn {
                square: from,
                expected: self.to_move,
                found: piece.color,
            });
        }
        if !self.rules.is_legal_move(piece, from, to, &self.board) {
            tracing::debug!(%mv, %piece, rules = self.rules.name(), "rejected move");
            return Err(GameError::IllegalMove(mv));
        }

        let captured = self.board.apply_move(from, to);
        self.to_move = piece.color.opposite();

        let outcome = MoveOutcome {
            mv,
            piece,
            captured,
            mover: self.rules.status(&self.board, piece.color),
            opponent: self.rules.status(&self.board, piece.color.opposite()),
        };
        tracing::debug!(
            %mv,
            %piece,
            captured = ?captured,
            mover = %outcome.mover,
            opponent = %outcome.opponent,
            "applied move"
        );
        Ok(outcome)
    }

    /// Plays a move given as a [`Move`].
    pub fn play_move(&mut self, mv: Move) -> Result<MoveOutcome, GameError> {
        self.play(mv.from(), mv.to())
    }

    /// Puts the board back in the starting position, White to move.
    pub fn reset(&mut self) {
        self.board = Board::standard();
        self.selected = None;
        self.to_move = Color::White;
    }

    /// Captures the state needed to resume this game later.
    pub fn snapshot(&self) -> SavedGame {
        SavedGame::new(self.board, self.to_move)
    }

    /// Replaces the board and side to move with a saved state.
    pub fn restore(&mut self, saved: SavedGame) {
        self.board.replace(saved.board);
        self.to_move = saved.to_move;
        self.selected = None;
    }

    /// Writes the game to a save file.
    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        persist::save_game(path, &self.snapshot())
    }

    /// Reads a save file and replaces the game with it.
    ///
    /// On error the current game is left exactly as it was.
    pub fn load(&mut self, path: &Path) -> Result<(), PersistError> {
        match persist::load_game(path) {
            Ok(saved) => {
                self.restore(saved);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "load failed, keeping current game");
                Err(e)
            }
        }
    }
}
