//! Game state module - the complete round state machine
//!
//! This module ties the leaves together: the block generator, the motion
//! updater, and the scoring rules. It owns the single aggregate the driver
//! threads through the round and implements the placement resolver.
//!
//! Lifecycle: `NotStarted --start--> Playing --miss--> Over --start-->
//! Playing`. `Playing` self-loops on `tick` and on successful `place`.
//! Every operation is total: in an inapplicable state it returns `false`
//! and leaves the state untouched.
//!
//! The state is mutated in place through `&mut self`, which under Rust's
//! aliasing rules gives exactly the serialized one-transition-at-a-time
//! model the driver contract requires; there is no interior mutability and
//! no I/O anywhere in this module. The one side effect the original design
//! buried inside placement - persisting a beaten high score - is surfaced
//! as an intent on [`PlacementEvent`] for the lifecycle controller to act on.

use crate::block::{overlap_width, Block};
use crate::generator::next_block;
use crate::motion::sweep;
use crate::scoring::{level_for, placement_score};
use stack_tower_types::{Direction, Phase, PlacementEvent, PERFECT_TOLERANCE};

/// Complete state of one round (plus the cross-round high score)
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Placed blocks, index 0 is the immovable base; append-only in a round
    blocks: Vec<Block>,
    /// The block in flight, absent outside `Playing` and after a miss
    current: Option<Block>,
    score: u32,
    /// Monotonically non-decreasing across rounds; the only carried value
    high_score: u32,
    phase: Phase,
    /// Travel direction of the current block; flips on every placement
    direction: Direction,
    level: u32,
    /// Consecutive perfect placements; any imperfect placement resets it
    combo: u32,
    /// Last placement outcome (consumed by observers)
    last_event: Option<PlacementEvent>,
}

impl GameState {
    /// Fresh state: a single centered base block, no block in flight,
    /// `NotStarted`. `high_score` comes from the external store; the core
    /// never reads or writes storage itself.
    pub fn new(high_score: u32) -> Self {
        Self {
            blocks: vec![Block::base()],
            current: None,
            score: 0,
            high_score,
            phase: Phase::NotStarted,
            direction: Direction::Right,
            level: 1,
            combo: 0,
            last_event: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn current(&self) -> Option<Block> {
        self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Begin a round. Always starts from a clean slate (this is not a
    /// resume): any prior stack is discarded, only the high score carries
    /// over. No-op while a round is already playing.
    pub fn start(&mut self) {
        if self.phase == Phase::Playing {
            return;
        }
        *self = Self::new(self.high_score);
        self.phase = Phase::Playing;
        self.spawn_current();
    }

    /// Return to the not-started screen. Equivalent to `new`, with the
    /// in-memory high score carried over; the lifecycle controller re-loads
    /// the stored value on top of this.
    pub fn reset(&mut self) {
        *self = Self::new(self.high_score);
    }

    /// Spawn the next moving block on top of the stack.
    ///
    /// The stack always holds at least the base block, so generation cannot
    /// fail; `current` is non-null the instant this returns.
    fn spawn_current(&mut self) {
        if let Some(top) = self.blocks.last() {
            self.current = Some(next_block(top, self.blocks.len(), self.direction, self.level));
        }
    }

    /// Advance the current block one step along its sweep.
    ///
    /// No-op (returns `false`) unless the round is playing and a block is
    /// in flight; the driver may keep ticking in any state.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        let Some(current) = self.current else {
            return false;
        };
        self.current = Some(sweep(current, self.direction));
        true
    }

    /// Resolve a placement gesture against the top of the stack.
    ///
    /// Returns `false` if there is nothing to resolve (no block in flight,
    /// empty stack, or the round is already over). Otherwise either appends
    /// the trimmed block and immediately spawns the next one, or - when the
    /// spans are disjoint - ends the round. Either way the outcome is
    /// recorded for [`take_last_event`](Self::take_last_event).
    pub fn place(&mut self) -> bool {
        if self.phase == Phase::Over {
            return false;
        }
        let Some(current) = self.current else {
            return false;
        };
        let Some(&top) = self.blocks.last() else {
            return false;
        };

        let overlap = overlap_width(&current, &top);

        if overlap <= 0.0 {
            // Missed the stack entirely: the single terminal transition.
            self.phase = Phase::Over;
            self.current = None;
            self.last_event = Some(PlacementEvent {
                placed: false,
                perfect: false,
                overlap: 0.0,
                score_delta: 0,
                combo: self.combo,
                level: self.level,
                new_high_score: false,
            });
            return true;
        }

        // Trim the block to the clamped overlap with the stack top.
        let x = current.x.max(top.x);
        let perfect = (overlap - top.width).abs() <= PERFECT_TOLERANCE
            && (x - top.x).abs() <= PERFECT_TOLERANCE;

        self.blocks.push(Block {
            x,
            width: overlap,
            perfect,
            ..current
        });

        self.combo = if perfect { self.combo + 1 } else { 0 };
        let score_delta = placement_score(perfect, self.combo);
        self.score += score_delta;
        self.level = level_for(self.blocks.len());
        self.direction = self.direction.flip();

        // No spawn-delay tick: the next block exists the instant a hit
        // resolves, generated against the stack including the new block.
        self.spawn_current();

        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }

        self.last_event = Some(PlacementEvent {
            placed: true,
            perfect,
            overlap,
            score_delta,
            combo: self.combo,
            level: self.level,
            new_high_score,
        });
        true
    }

    /// Take and clear the last placement outcome.
    pub fn take_last_event(&mut self) -> Option<PlacementEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut crate::snapshot::GameSnapshot) {
        out.blocks.clear();
        out.blocks.extend_from_slice(&self.blocks);
        out.current = self.current;
        out.direction = self.direction;
        out.phase = self.phase;
        out.score = self.score;
        out.high_score = self.high_score;
        out.level = self.level;
        out.combo = self.combo;
    }

    pub fn snapshot(&self) -> crate::snapshot::GameSnapshot {
        let mut s = crate::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stack_tower_types::{BLOCK_HEIGHT, INITIAL_BLOCK_WIDTH, PLAYFIELD_WIDTH};

    /// Park the current block on the stack top's exact span, shifted by
    /// `dx`. Generated widths start 5% narrower than the base, so width is
    /// matched too; this is how a player lines up a perfect placement.
    fn park_current(state: &mut GameState, dx: f32) {
        let top = *state.blocks().last().expect("stack has a base");
        let current = state.current().expect("block in flight");
        state.current = Some(Block {
            x: top.x + dx,
            width: top.width,
            ..current
        });
    }

    /// Offset the current block's left edge relative to the stack top,
    /// keeping its generated width.
    fn offset_current(state: &mut GameState, dx: f32) {
        let top = *state.blocks().last().expect("stack has a base");
        let current = state.current().expect("block in flight");
        state.current = Some(Block {
            x: top.x + dx,
            ..current
        });
    }

    #[test]
    fn new_state_is_not_started() {
        let state = GameState::new(42);

        assert_eq!(state.phase(), Phase::NotStarted);
        assert_eq!(state.blocks().len(), 1);
        assert_eq!(state.blocks()[0].id, 0);
        assert!(state.current().is_none());
        assert_eq!(state.score(), 0);
        assert_eq!(state.high_score(), 42);
        assert_eq!(state.level(), 1);
        assert_eq!(state.combo(), 0);
        assert_eq!(state.direction(), Direction::Right);
    }

    #[test]
    fn start_enters_playing_and_spawns_a_block() {
        let mut state = GameState::new(0);
        state.start();

        assert_eq!(state.phase(), Phase::Playing);
        let current = state.current().expect("start spawns a block");
        assert_eq!(current.id, 1);
        // First block travels rightward, so it enters from off-screen left.
        assert_eq!(current.x, -current.width);
        assert_eq!(current.y, BLOCK_HEIGHT);
    }

    #[test]
    fn start_is_a_no_op_while_playing() {
        let mut state = GameState::new(0);
        state.start();
        park_current(&mut state, 0.0);
        state.place();
        let before = state.clone();

        state.start();
        assert_eq!(state, before);
    }

    #[test]
    fn start_after_game_over_is_a_full_reset() {
        let mut state = GameState::new(0);
        state.start();
        park_current(&mut state, 0.0);
        state.place();
        let high_score = state.high_score();

        // Force a miss.
        offset_current(&mut state, PLAYFIELD_WIDTH);
        state.place();
        assert_eq!(state.phase(), Phase::Over);

        state.start();
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.blocks().len(), 1);
        assert_eq!(state.score(), 0);
        assert_eq!(state.high_score(), high_score);
        assert!(state.current().is_some());
    }

    #[test]
    fn tick_is_a_no_op_before_start() {
        let mut state = GameState::new(0);
        let before = state.clone();
        assert!(!state.tick());
        assert_eq!(state, before);
    }

    #[test]
    fn tick_advances_the_current_block() {
        let mut state = GameState::new(0);
        state.start();

        let x0 = state.current().unwrap().x;
        assert!(state.tick());
        let x1 = state.current().unwrap().x;
        assert_eq!(x1, x0 + state.current().unwrap().speed);
    }

    #[test]
    fn tick_never_flips_direction_in_flight() {
        let mut state = GameState::new(0);
        state.start();

        for _ in 0..10_000 {
            state.tick();
            assert_eq!(state.direction(), Direction::Right);
        }
    }

    #[test]
    fn place_is_a_no_op_with_no_current_block() {
        let mut state = GameState::new(0);
        let before = state.clone();
        assert!(!state.place());
        assert_eq!(state, before);
    }

    #[test]
    fn exact_placement_is_perfect() {
        let mut state = GameState::new(0);
        state.start();
        park_current(&mut state, 0.0);

        assert!(state.place());
        let placed = *state.blocks().last().unwrap();
        assert!(placed.perfect);
        assert_eq!(state.combo(), 1);
        assert_eq!(state.score(), 11);

        let event = state.take_last_event().unwrap();
        assert!(event.placed);
        assert!(event.perfect);
        assert_eq!(event.score_delta, 11);
    }

    #[test]
    fn placement_within_tolerance_is_perfect() {
        let mut state = GameState::new(0);
        state.start();
        offset_current(&mut state, PERFECT_TOLERANCE);

        state.place();
        assert!(state.blocks().last().unwrap().perfect);
    }

    #[test]
    fn shifted_placement_is_not_perfect() {
        let mut state = GameState::new(0);
        state.start();
        offset_current(&mut state, 50.0);

        state.place();
        let placed = *state.blocks().last().unwrap();
        assert!(!placed.perfect);
        assert_eq!(state.combo(), 0);
        assert_eq!(state.score(), 1);
        // Trimmed to the overlap region: the generated block is wider than
        // the remaining stack-top span, so the top's right edge clips it.
        assert_eq!(placed.width, INITIAL_BLOCK_WIDTH - 50.0);
    }

    #[test]
    fn placed_block_is_contained_in_the_block_below() {
        let mut state = GameState::new(0);
        state.start();
        for dx in [30.0, -20.0, 10.0, -5.0, 0.0] {
            offset_current(&mut state, dx);
            state.place();
            let blocks = state.blocks();
            let below = blocks[blocks.len() - 2];
            let placed = blocks[blocks.len() - 1];
            assert!(placed.x >= below.x);
            assert!(placed.right() <= below.right() + 1e-4);
        }
    }

    #[test]
    fn miss_ends_the_round_and_preserves_score() {
        let mut state = GameState::new(0);
        state.start();
        park_current(&mut state, 0.0);
        state.place();
        let score = state.score();
        let stack = state.blocks().len();

        offset_current(&mut state, PLAYFIELD_WIDTH);
        assert!(state.place());

        assert_eq!(state.phase(), Phase::Over);
        assert!(state.current().is_none());
        assert_eq!(state.score(), score);
        assert_eq!(state.blocks().len(), stack);

        let event = state.take_last_event().unwrap();
        assert!(!event.placed);
        assert_eq!(event.score_delta, 0);
    }

    #[test]
    fn miss_is_terminal() {
        let mut state = GameState::new(0);
        state.start();
        offset_current(&mut state, PLAYFIELD_WIDTH);
        state.place();

        let over = state.clone();
        assert!(!state.tick());
        assert!(!state.place());
        assert_eq!(state, over);
    }

    #[test]
    fn direction_alternates_on_every_placement() {
        let mut state = GameState::new(0);
        state.start();
        assert_eq!(state.direction(), Direction::Right);

        park_current(&mut state, 0.0);
        state.place();
        assert_eq!(state.direction(), Direction::Left);
        // Leftward travel enters from off-screen right.
        assert_eq!(state.current().unwrap().x, PLAYFIELD_WIDTH);

        park_current(&mut state, 0.0);
        state.place();
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.current().unwrap().x, -state.current().unwrap().width);
    }

    #[test]
    fn next_block_spawns_immediately_on_hit() {
        let mut state = GameState::new(0);
        state.start();
        park_current(&mut state, 0.0);
        state.place();

        let current = state.current().expect("no spawn-delay tick");
        assert_eq!(current.id, 2);
        assert_eq!(current.y, 2.0 * BLOCK_HEIGHT);
    }

    #[test]
    fn combo_streak_scores_11_21_26() {
        let mut state = GameState::new(0);
        state.start();

        let mut deltas = Vec::new();
        for _ in 0..3 {
            park_current(&mut state, 0.0);
            state.place();
            deltas.push(state.take_last_event().unwrap().score_delta);
        }

        assert_eq!(deltas, vec![11, 21, 26]);
        assert_eq!(state.combo(), 3);
        assert_eq!(state.score(), 58);
    }

    #[test]
    fn imperfect_placement_resets_the_combo() {
        let mut state = GameState::new(0);
        state.start();
        park_current(&mut state, 0.0);
        state.place();
        park_current(&mut state, 0.0);
        state.place();
        assert_eq!(state.combo(), 2);

        offset_current(&mut state, 40.0);
        state.place();
        assert_eq!(state.combo(), 0);
        assert_eq!(state.take_last_event().unwrap().score_delta, 1);
    }

    #[test]
    fn ids_are_monotonic_and_dense() {
        let mut state = GameState::new(0);
        state.start();
        for _ in 0..12 {
            park_current(&mut state, 0.0);
            state.place();
        }
        for (i, block) in state.blocks().iter().enumerate() {
            assert_eq!(block.id as usize, i);
        }
    }

    #[test]
    fn level_steps_every_fifth_placed_block() {
        let mut state = GameState::new(0);
        state.start();
        assert_eq!(state.level(), 1);

        let mut levels = Vec::new();
        for _ in 0..10 {
            park_current(&mut state, 0.0);
            state.place();
            levels.push(state.level());
        }

        // Stack grows 2..=11; level = len / 5 + 1.
        assert_eq!(levels, vec![1, 1, 1, 2, 2, 2, 2, 2, 3, 3]);
    }

    #[test]
    fn high_score_updates_and_emits_persist_intent() {
        let mut state = GameState::new(5);
        state.start();

        park_current(&mut state, 0.0);
        state.place();
        assert_eq!(state.score(), 11);
        assert_eq!(state.high_score(), 11);
        assert!(state.take_last_event().unwrap().new_high_score);
    }

    #[test]
    fn high_score_is_not_touched_below_the_record() {
        let mut state = GameState::new(100);
        state.start();

        offset_current(&mut state, 40.0);
        state.place();
        assert_eq!(state.high_score(), 100);
        assert!(!state.take_last_event().unwrap().new_high_score);
    }

    #[test]
    fn high_score_survives_reset() {
        let mut state = GameState::new(0);
        state.start();
        park_current(&mut state, 0.0);
        state.place();
        let high = state.high_score();

        state.reset();
        assert_eq!(state.phase(), Phase::NotStarted);
        assert_eq!(state.high_score(), high);
        assert_eq!(state.score(), 0);
        assert_eq!(state.blocks().len(), 1);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut state = GameState::new(7);
        state.start();
        state.tick();
        state.reset();
        let once = state.clone();
        state.reset();
        assert_eq!(state, once);
    }

    #[test]
    fn snapshot_reflects_the_state() {
        let mut state = GameState::new(3);
        state.start();
        park_current(&mut state, 0.0);
        state.place();

        let snap = state.snapshot();
        assert_eq!(snap.blocks.len(), state.blocks().len());
        assert_eq!(snap.current, state.current());
        assert_eq!(snap.score, state.score());
        assert_eq!(snap.high_score, state.high_score());
        assert_eq!(snap.phase, Phase::Playing);
        assert!(snap.playable());
    }

    #[test]
    fn snapshot_into_reuses_the_allocation() {
        let mut state = GameState::new(0);
        state.start();

        let mut snap = state.snapshot();
        let cap_before = snap.blocks.capacity();
        state.snapshot_into(&mut snap);
        assert!(snap.blocks.capacity() >= cap_before);
        assert_eq!(snap.blocks.len(), state.blocks().len());
    }

    #[test]
    fn default_state_has_no_high_score() {
        let state = GameState::default();
        assert_eq!(state.high_score(), 0);
        assert_eq!(state.phase(), Phase::NotStarted);
    }
}
