//! Saving and restoring a game as JSON.
//!
//! A save holds the whole board, cell by cell, plus the side expected to move
//! next. Loading yields a complete [`SavedGame`]; callers swap it in as a
//! whole, so a failed load never leaves a half-restored board behind.

use crate::Board;
use gridchess_core::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Save format version written by this crate.
pub const SAVE_VERSION: u32 = 1;

/// Errors that can occur while saving or loading.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("no saved game found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported save version {found}")]
    UnsupportedVersion { found: u32 },
}

/// Everything needed to resume a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub version: u32,
    #[serde(default)]
    pub to_move: Color,
    pub board: Board,
}

impl SavedGame {
    /// Wraps a board and the side to move in the current save format.
    pub fn new(board: Board, to_move: Color) -> Self {
        SavedGame {
            version: SAVE_VERSION,
            to_move,
            board,
        }
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses JSON, rejecting saves from other format versions.
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let saved: SavedGame = serde_json::from_str(json)?;
        if saved.version != SAVE_VERSION {
            return Err(PersistError::UnsupportedVersion {
                found: saved.version,
            });
        }
        Ok(saved)
    }
}

/// Writes a save file.
///
/// The data goes to a sibling temporary file first and is then renamed over
/// `path`, so readers see either the old save or the new one.
pub fn save_game(path: &Path, saved: &SavedGame) -> Result<(), PersistError> {
    let json = saved.to_json()?;
    let tmp = temp_path(path);
    let io_err = |source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&tmp, json).map_err(io_err)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(e));
    }
    tracing::info!(path = %path.display(), pieces = saved.board.count(), "game saved");
    Ok(())
}

/// `game.json` -> `game.json.tmp`, so the temporary file never collides with `path`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Reads a save file.
pub fn load_game(path: &Path) -> Result<SavedGame, PersistError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(PersistError::NotFound(path.to_path_buf()))
        }
        Err(source) => {
            return Err(PersistError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let saved = SavedGame::from_json(&json)?;
    tracing::info!(path = %path.display(), pieces = saved.board.count(), "game loaded");
    Ok(saved)
}
