//! High-score store seam
//!
//! The simulation core never touches storage; it only raises a
//! persist-high-score intent. This crate defines the capability the
//! lifecycle controller is handed to act on that intent - a trait plus two
//! implementations:
//!
//! - [`MemoryStore`]: in-process, the default for tests and headless runs
//! - [`JsonFileStore`]: best-effort single-value JSON file
//!
//! Both honor the store contract: `load` yields 0 when nothing was ever
//! recorded, and `save` persists only when the new score strictly exceeds
//! the stored one, so the stored value is monotonically non-decreasing.
//! Failures surface as `anyhow` errors; degrading on them (missing store
//! means "no prior high score") is the caller's policy, not the store's.

mod json;

pub use json::JsonFileStore;

use anyhow::Result;

/// Capability for loading and persisting the single cross-round scalar.
pub trait HighScoreStore {
    /// The previously recorded high score, 0 if absent.
    fn load(&self) -> Result<u32>;

    /// Record `score` if it strictly exceeds the stored value.
    fn save(&mut self, score: u32) -> Result<()>;
}

/// In-process store; nothing outlives the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    best: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, for tests that need a prior record.
    pub fn with_high_score(best: u32) -> Self {
        Self { best }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32> {
        Ok(self.best)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        if score > self.best {
            self.best = score;
        }
        Ok(())
    }
}
