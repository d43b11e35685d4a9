use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::data_dir;

const SCORE_FILE_NAME: &str = "high_score.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Persistent best score, stored as JSON.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store at the platform's local data directory.
    #[must_use]
    pub fn platform_default() -> Self {
        Self::at(data_dir().join(SCORE_FILE_NAME))
    }

    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored score.
    ///
    /// A missing file is a first run and yields `Ok(0)`; a file that exists
    /// but cannot be read or parsed is an error.
    pub fn load(&self) -> io::Result<u32> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(error) => return Err(error),
        };

        serde_json::from_str::<ScoreFile>(&raw)
            .map(|file| file.high_score)
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
    }

    /// Writes `score`, creating parent directories as needed.
    pub fn save(&self, score: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&ScoreFile { high_score: score })
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
        fs::write(&self.path, json)?;
        debug!("saved high score {score} to {}", self.path.display());
        Ok(())
    }

    /// Saves `score` if it beats `current`, returning the best of the two.
    ///
    /// Write failures are logged and do not lose the in-memory record.
    pub fn record(&self, current: u32, score: u32) -> u32 {
        if score <= current {
            return current;
        }

        if let Err(error) = self.save(score) {
            warn!("failed to save high score to {}: {error}", self.path.display());
        }
        score
    }
}

/// Session view of the high score.
///
/// Keeps the best as it stood before the latest game ended, so the game-over
/// screen can still tell that the final score set a new record after the
/// store has already been updated.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ScoreBoard {
    best: u32,
    best_before_last_game: u32,
}

impl ScoreBoard {
    #[must_use]
    pub fn new(best: u32) -> Self {
        Self {
            best,
            best_before_last_game: best,
        }
    }

    /// Records the final score of a game, persisting it when it is a record.
    pub fn finish_game(&mut self, store: &HighScoreStore, score: u32) {
        self.best_before_last_game = self.best;
        self.best = store.record(self.best, score);
    }

    #[must_use]
    pub fn best(&self) -> u32 {
        self.best
    }

    #[must_use]
    pub fn best_before_last_game(&self) -> u32 {
        self.best_before_last_game
    }
}
