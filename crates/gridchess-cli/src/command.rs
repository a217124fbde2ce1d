//! Mapping typed input to commands.

use gridchess_core::{Move, MoveParseError, Square, SquareError};
use thiserror::Error;

/// Errors from parsing a line of input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("'{0}' needs a square, e.g. '{0} e2'")]
    MissingSquare(&'static str),
    #[error(transparent)]
    Square(#[from] SquareError),
    #[error(transparent)]
    Move(#[from] MoveParseError),
}

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click on a square: select it, or move the selected piece there.
    Select(Square),
    /// Move in one go, e.g. `e2e4` or `e2 e4`.
    Move(Move),
    /// List where the piece on a square may go.
    Moves(Square),
    /// Print the board.
    Show,
    Save,
    Load,
    /// Start over from the standard position.
    New,
    Help,
    Quit,
}

impl Command {
    /// Parses a line. Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let cmd = match first.to_ascii_lowercase().as_str() {
            "show" | "board" => Command::Show,
            "save" => Command::Save,
            "load" => Command::Load,
            "new" | "reset" => Command::New,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "moves" => {
                let sq = rest.first().ok_or(CommandError::MissingSquare("moves"))?;
                Command::Moves(sq.parse()?)
            }
            word if word.len() == 2 && rest.is_empty() => Command::Select(word.parse()?),
            word if word.len() == 2 || word.len() == 4 || word.len() == 5 => {
                Command::Move(Move::parse(line)?)
            }
            _ => return Err(CommandError::Unknown(line.to_string())),
        };
        Ok(Some(cmd))
    }
}
