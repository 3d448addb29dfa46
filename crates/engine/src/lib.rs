//! Lifecycle controller - binds the pure core to the high-score store
//!
//! The [`Engine`] is the effect handler the simulation core is designed
//! around: the core computes transitions and raises a persist-high-score
//! intent; the engine owns the injected [`HighScoreStore`] capability and
//! performs the one external write. Store failures never reach the core -
//! a missing or broken store degrades to "no prior high score" on load and
//! to a logged warning on save.
//!
//! The engine is also where the driver plugs in: it forwards `tick` on the
//! fixed cadence and `place` per user gesture, both synchronously.
//!
//! # Example
//!
//! ```
//! use stack_tower_engine::Engine;
//! use stack_tower_store::MemoryStore;
//!
//! let mut engine = Engine::new(MemoryStore::new());
//! engine.start();
//! engine.tick();
//! if let Some(event) = engine.place() {
//!     // render score popups, play sounds, ...
//!     let _ = event.score_delta;
//! }
//! ```

use stack_tower_core::{GameSnapshot, GameState};
use stack_tower_store::HighScoreStore;
use stack_tower_types::{Phase, PlacementEvent};

/// One round of the tower plus its persistence capability.
#[derive(Debug)]
pub struct Engine<S> {
    state: GameState,
    store: S,
}

impl<S: HighScoreStore> Engine<S> {
    /// Build the initial state, loading the recorded high score from the
    /// injected store. A store that cannot load is treated as empty.
    pub fn new(store: S) -> Self {
        let high_score = store.load().unwrap_or_else(|err| {
            log::warn!("high score store unavailable, starting from 0: {err:#}");
            0
        });
        Self {
            state: GameState::new(high_score),
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Begin a round; no-op while one is playing. Starting from the
    /// game-over screen is a full reset of the stack, not a resume.
    pub fn start(&mut self) {
        if self.state.phase() == Phase::Playing {
            return;
        }
        self.refresh_high_score();
        self.state.start();
    }

    /// Return to the not-started screen, re-loading the stored high score.
    pub fn reset(&mut self) {
        self.refresh_high_score();
        self.state.reset();
    }

    /// Advance the sweeping block one step; no-op outside `Playing`.
    pub fn tick(&mut self) -> bool {
        self.state.tick()
    }

    /// Resolve a placement gesture. When the outcome carries the
    /// persist-high-score intent, the store write happens here - at most
    /// one write per placement, and never one that lowers the record.
    pub fn place(&mut self) -> Option<PlacementEvent> {
        if !self.state.place() {
            return None;
        }
        let event = self.state.take_last_event();
        if let Some(event) = &event {
            if event.new_high_score {
                let score = self.state.score();
                if let Err(err) = self.store.save(score) {
                    log::warn!("failed to persist high score {score}: {err:#}");
                }
            }
            if !event.placed {
                log::debug!(
                    "round over at score {} (high score {})",
                    self.state.score(),
                    self.state.high_score()
                );
            }
        }
        event
    }

    /// Re-load the stored record, keeping the in-memory value when the
    /// store lags behind it (e.g. after a failed save).
    fn refresh_high_score(&mut self) {
        let in_memory = self.state.high_score();
        let stored = self.store.load().unwrap_or_else(|err| {
            log::warn!("high score store unavailable, keeping {in_memory}: {err:#}");
            in_memory
        });
        self.state = GameState::new(stored.max(in_memory));
    }
}
