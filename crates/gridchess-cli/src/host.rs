//! The interactive session: runs commands against a game and prints results.

use crate::command::Command;
use crate::config::HostConfig;
use gridchess_engine::{Click, Game, GameError, MoveOutcome, PersistError, Rules, Status};
use std::io::{self, Write};

const HELP: &str = "\
commands:
  e2          select a square; a second square moves the selected piece
  e2e4        move directly (also 'e2 e4' or 'e2-e4')
  moves e2    list the squares the piece on e2 may move to
  show        print the board
  save, load  write or read the save file
  new         start a new game
  quit        leave (saves first when autosave is on)";

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A play session writing its responses to `out`.
pub struct Host<W: Write> {
    game: Game<Rules>,
    config: HostConfig,
    out: W,
}

impl<W: Write> Host<W> {
    /// Creates a session with a fresh game.
    pub fn new(config: HostConfig, out: W) -> Self {
        let game = Game::with_rules(config.rules).enforce_turns(config.enforce_turns);
        Host { game, config, out }
    }

    #[cfg(test)]
    fn game(&self) -> &Game<Rules> {
        &self.game
    }

    /// Prints the board and whose turn it is.
    pub fn show(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.game.board())?;
        if self.game.turns_enforced() {
            writeln!(self.out, "{} to move", self.game.to_move())?;
        }
        Ok(())
    }

    /// Opens the session, optionally resuming from the save file.
    ///
    /// The board is always printed, even when there is nothing to resume.
    pub fn start(&mut self, resume: bool) -> io::Result<()> {
        if resume && self.load()? {
            return Ok(());
        }
        self.show()
    }

    /// Runs one command.
    pub fn handle(&mut self, cmd: Command) -> io::Result<Flow> {
        match cmd {
            Command::Select(sq) => match self.game.select(sq) {
                Ok(Click::Selected(sq)) => {
                    let what = match self.game.board().get(sq) {
                        Some(piece) => piece.to_string(),
                        None => "empty square".to_string(),
                    };
                    writeln!(self.out, "selected {} ({})", sq, what)?;
                }
                Ok(Click::Moved(outcome)) => self.report(outcome)?,
                Err(e) => self.reject(e)?,
            },
            Command::Move(mv) => {
                self.game.deselect();
                match self.game.play_move(mv) {
                    Ok(outcome) => self.report(outcome)?,
                    Err(e) => self.reject(e)?,
                }
            }
            Command::Moves(sq) => {
                let targets: Vec<String> = self
                    .game
                    .legal_destinations(sq)
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                if targets.is_empty() {
                    writeln!(self.out, "no moves from {}", sq)?;
                } else {
                    writeln!(self.out, "{}: {}", sq, targets.join(" "))?;
                }
            }
            Command::Show => self.show()?,
            Command::Save => self.save()?,
            Command::Load => {
                self.load()?;
            }
            Command::New => {
                self.game.reset();
                self.show()?;
            }
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => {
                if self.config.autosave {
                    self.save()?;
                }
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Loads the save file, printing the board on success.
    fn load(&mut self) -> io::Result<bool> {
        match self.game.load(&self.config.save_file) {
            Ok(()) => {
                writeln!(self.out, "Game loaded!")?;
                self.show()?;
                return Ok(true);
            }
            Err(PersistError::NotFound(_)) => writeln!(self.out, "No saved game found.")?,
            Err(e) => writeln!(self.out, "Could not load: {}", e)?,
        }
        Ok(false)
    }

    fn save(&mut self) -> io::Result<()> {
        match self.game.save(&self.config.save_file) {
            Ok(()) => writeln!(self.out, "Game saved!"),
            Err(e) => writeln!(self.out, "Could not save: {}", e),
        }
    }

    fn reject(&mut self, err: GameError) -> io::Result<()> {
        match err {
            GameError::EmptySource(_) => writeln!(self.out, "No piece selected."),
            GameError::IllegalMove(_) => writeln!(self.out, "Invalid move!"),
            other => writeln!(self.out, "{}", other),
        }
    }

    fn report(&mut self, outcome: MoveOutcome) -> io::Result<()> {
        let mover = outcome.piece.color;
        match outcome.captured {
            Some(captured) => writeln!(
                self.out,
                "{} {} takes {}",
                outcome.piece, outcome.mv, captured
            )?,
            None => writeln!(self.out, "{} {}", outcome.piece, outcome.mv)?,
        }
        self.show()?;
        match outcome.opponent {
            Status::Checkmate => writeln!(self.out, "Checkmate! {} wins!", mover)?,
            Status::Check => writeln!(self.out, "Check! {} is in check.", mover.opposite())?,
            Status::Normal => {}
        }
        if outcome.mover != Status::Normal {
            writeln!(self.out, "Warning: {} left its own king in check.", mover)?;
        }
        Ok(())
    }
}
