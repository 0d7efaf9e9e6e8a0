//! Versioned save snapshot.
//!
//! A small JSON document holding resources, score and the current level.
//! A missing save file is "no save", not an error. Snapshots written by a
//! newer format version are rejected rather than guessed at.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::economy::ResourceType;

pub const SAVE_VERSION: u32 = 1;

pub const DEFAULT_SAVE_FILE: &str = "shadow_survivor_save.json";

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Save file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Save file format error: {0}")]
    Format(#[from] serde_json::Error),
    #[error("Save version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveSnapshot {
    pub version: u32,
    pub resources: BTreeMap<ResourceType, u32>,
    pub score: u64,
    pub current_level: usize,
}

impl SaveSnapshot {
    pub fn new(resources: BTreeMap<ResourceType, u32>, score: u64, current_level: usize) -> Self {
        Self {
            version: SAVE_VERSION,
            resources,
            score,
            current_level,
        }
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        let snapshot: SaveSnapshot = serde_json::from_str(json)?;
        if snapshot.version > SAVE_VERSION {
            return Err(SaveError::UnsupportedVersion {
                found: snapshot.version,
                supported: SAVE_VERSION,
            });
        }
        Ok(snapshot)
    }
}

/// Save slot backed by a single file
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in `dir` under the default file name
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_SAVE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, snapshot: &SaveSnapshot) -> Result<(), SaveError> {
        std::fs::write(&self.path, snapshot.to_json()?)?;
        tracing::debug!(path = %self.path.display(), "game saved");
        Ok(())
    }

    /// `Ok(None)` when no save exists
    pub fn load(&self) -> Result<Option<SaveSnapshot>, SaveError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        SaveSnapshot::from_json(&text).map(Some)
    }

    /// Remove the save. Clearing an absent save succeeds.
    pub fn clear(&self) -> Result<(), SaveError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
