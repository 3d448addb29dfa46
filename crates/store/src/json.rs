//! JSON-file high-score store
//!
//! Persists the single scalar as a tiny JSON document
//! (`{"high_score": 42}`) so the file stays human-readable and forward-
//! extensible. A missing file reads as "no prior high score"; a corrupt or
//! unreadable one surfaces as an error for the caller to degrade on.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::HighScoreStore;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// Best-effort file-backed store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_record(&self) -> Result<HighScoreRecord> {
        if !self.path.exists() {
            return Ok(HighScoreRecord::default());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading high score file {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing high score file {}", self.path.display()))
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32> {
        Ok(self.read_record()?.high_score)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        let stored = self.read_record()?;
        if score <= stored.high_score {
            return Ok(());
        }
        let raw = serde_json::to_string(&HighScoreRecord { high_score: score })
            .context("serializing high score record")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing high score file {}", self.path.display()))
    }
}
