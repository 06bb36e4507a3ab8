//! Persistent storage for the high score and player settings.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SAVE_FILE: &str = "snake_save.json";
pub const SAVE_PATH_ENV: &str = "SNAKE_SAVE_PATH";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to access save file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("save file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub best_score: u32,
    /// Master volume in `0.0..=1.0`
    pub sound_volume: f32,
}

impl Default for SaveData {
    fn default() -> Self {
        Self { best_score: 0, sound_volume: 1.0 }
    }
}

/// A save file on disk.
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$SNAKE_SAVE_PATH`, falling back to `snake_save.json` in the working directory.
    pub fn from_env() -> Self {
        match std::env::var_os(SAVE_PATH_ENV) {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::new(DEFAULT_SAVE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the save, treating any problem as a fresh save.
    pub fn load(&self) -> SaveData {
        match self.try_load() {
            Ok(data) => data,
            Err(err) => {
                log::warn!("{err}; starting from defaults");
                SaveData::default()
            }
        }
    }

    /// Load the save. A missing file is not an error.
    pub fn try_load(&self) -> Result<SaveData, SaveError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no save file at {}", self.path.display());
                return Ok(SaveData::default());
            }
            Err(source) => return Err(SaveError::Io { path: self.path.clone(), source }),
        };
        match serde_json::from_str::<SaveData>(&text) {
            Ok(data) => Ok(data),
            // Older saves hold just the score.
            Err(source) => text
                .trim()
                .parse::<u32>()
                .map(|best_score| SaveData { best_score, ..SaveData::default() })
                .map_err(|_| SaveError::Malformed { path: self.path.clone(), source }),
        }
    }

    pub fn write(&self, data: &SaveData) -> Result<(), SaveError> {
        let io_err = |source: io::Error| SaveError::Io { path: self.path.clone(), source };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(data)
            .map_err(|source| SaveError::Malformed { path: self.path.clone(), source })?;
        fs::write(&self.path, text).map_err(io_err)
    }

    /// Store `score` if it beats the saved best. Returns whether it did.
    pub fn record_high_score(&self, score: u32) -> Result<bool, SaveError> {
        let mut data = self.load();
        if score <= data.best_score {
            return Ok(false);
        }
        data.best_score = score;
        self.write(&data)?;
        log::info!("high score {score} saved to {}", self.path.display());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let data = SaveData::default();
        assert_eq!(data.best_score, 0);
        assert_eq!(data.sound_volume, 1.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let data: SaveData = serde_json::from_str(r#"{ "best_score": 12 }"#).unwrap();
        assert_eq!(data.best_score, 12);
        assert_eq!(data.sound_volume, 1.0);
    }

    #[test]
    fn negative_score_is_malformed() {
        assert!(serde_json::from_str::<SaveData>(r#"{ "best_score": -3 }"#).is_err());
    }
}
