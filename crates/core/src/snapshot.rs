//! Snapshot module - plain view of the state for render surfaces
//!
//! The core makes no assumptions about how the caller draws; it hands out a
//! flat copy of everything observable. Callers that render every tick can
//! hold one snapshot and refresh it in place with
//! [`GameState::snapshot_into`](crate::GameState::snapshot_into) so the
//! block list allocation is reused.

use crate::block::Block;
use stack_tower_types::{Direction, Phase};

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub blocks: Vec<Block>,
    pub current: Option<Block>,
    pub direction: Direction,
    pub phase: Phase,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub combo: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.current = None;
        self.direction = Direction::Right;
        self.phase = Phase::NotStarted;
        self.score = 0;
        self.high_score = 0;
        self.level = 1;
        self.combo = 0;
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Height of the stack in rows, base included
    pub fn stack_height(&self) -> usize {
        self.blocks.len()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            blocks: Vec::new(),
            current: None,
            direction: Direction::Right,
            phase: Phase::NotStarted,
            score: 0,
            high_score: 0,
            level: 1,
            combo: 0,
        }
    }
}
