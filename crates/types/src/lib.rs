//! Shared types module - data structures and constants for the tower simulation
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, drivers, render surfaces).
//!
//! # Playfield Geometry
//!
//! All horizontal measurements share one abstract pixel unit:
//!
//! - **Playfield width**: 600 units
//! - **Base block width**: 180 units (30% of the playfield, centered)
//! - **Block height**: 30 units per stack row
//!
//! # Difficulty Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_BLOCK_SPEED` | 2.0 | Sweep speed of the base round, units per tick |
//! | `MAX_BLOCK_SPEED` | 8.0 | Hard cap on sweep speed |
//! | `LEVEL_SPEED_STEP` | 0.2 | Speed multiplier gained per level |
//! | `BLOCKS_PER_LEVEL` | 5 | Stack size per level step |
//! | `WIDTH_SHRINK_FACTOR` | 0.95 | Width kept after an imperfect placement |
//! | `MIN_BLOCK_WIDTH` | 30.0 | Floor that keeps the round playable |
//!
//! # Scoring Constants
//!
//! Every successful placement scores `PLACEMENT_POINTS`; a perfect placement
//! adds `PERFECT_BONUS`, and the second consecutive perfect placement onward
//! adds `combo * COMBO_STEP` on top.
//!
//! # Examples
//!
//! ```
//! use stack_tower_types::{BlockColor, Direction, Phase, PLAYFIELD_WIDTH};
//!
//! // Direction flips on every successful placement
//! assert_eq!(Direction::Right.flip(), Direction::Left);
//!
//! // The palette cycles with stack height
//! assert_eq!(BlockColor::for_index(0), BlockColor::for_index(6));
//!
//! // Lifecycle starts before the first round
//! assert_eq!(Phase::default(), Phase::NotStarted);
//!
//! assert_eq!(PLAYFIELD_WIDTH, 600.0);
//! ```

/// Horizontal extent of the playfield in abstract pixel units
pub const PLAYFIELD_WIDTH: f32 = 600.0;

/// Width of the immovable base block (30% of the playfield)
pub const INITIAL_BLOCK_WIDTH: f32 = PLAYFIELD_WIDTH * 0.3;

/// Constant height of every block; row `i` sits at `y = i * BLOCK_HEIGHT`
pub const BLOCK_HEIGHT: f32 = 30.0;

/// Sweep speed of the first moving block, units per tick
pub const INITIAL_BLOCK_SPEED: f32 = 2.0;

/// Hard cap on sweep speed regardless of level
pub const MAX_BLOCK_SPEED: f32 = 8.0;

/// Pixel tolerance for a placement to count as perfect
pub const PERFECT_TOLERANCE: f32 = 5.0;

/// Minimum generated block width; shrink never goes below this
pub const MIN_BLOCK_WIDTH: f32 = 30.0;

/// Fraction of the top block's width kept after an imperfect placement
pub const WIDTH_SHRINK_FACTOR: f32 = 0.95;

/// Speed multiplier gained per level above 1
pub const LEVEL_SPEED_STEP: f32 = 0.2;

/// Number of placed blocks (base included) per level step
pub const BLOCKS_PER_LEVEL: usize = 5;

/// Base score for any successful placement
pub const PLACEMENT_POINTS: u32 = 1;

/// Bonus score for a perfect placement
pub const PERFECT_BONUS: u32 = 10;

/// Per-combo-count bonus, applied from the second consecutive perfect on
pub const COMBO_STEP: u32 = 5;

/// Target driver cadence in updates per second (informative; the core
/// itself is cadence-agnostic and advances one step per `tick` call)
pub const TICK_HZ: u32 = 60;

/// Horizontal travel direction of the current block
///
/// The direction is a property of the round, not of the block: it flips on
/// every successful placement and never changes while a block is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The opposite direction
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tower_types::Direction;
    ///
    /// assert_eq!(Direction::Left.flip(), Direction::Right);
    /// assert_eq!(Direction::Right.flip(), Direction::Left);
    /// ```
    pub fn flip(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Round lifecycle states
///
/// Replaces the started/over boolean pair with the explicit three-state
/// machine, so the unreachable "over but never started" combination cannot
/// be constructed:
///
/// - `NotStarted --start--> Playing`
/// - `Playing --miss--> Over`
/// - `Over --start--> Playing` (full reset, not a resume)
///
/// `Playing` self-loops on ticks and successful placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    Playing,
    Over,
}

impl Phase {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not_started",
            Phase::Playing => "playing",
            Phase::Over => "over",
        }
    }
}

/// Cosmetic block palette, cycled by stack position
///
/// Values mirror the six-color visual theme; the simulation never reads
/// them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Blue,
    LightBlue,
    Green,
    Orange,
    Pink,
    Purple,
}

/// Number of entries in the block palette
pub const PALETTE_LEN: usize = 6;

impl BlockColor {
    /// Palette entry for a stack index (wraps every `PALETTE_LEN` rows)
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_tower_types::BlockColor;
    ///
    /// assert_eq!(BlockColor::for_index(0), BlockColor::Blue);
    /// assert_eq!(BlockColor::for_index(5), BlockColor::Purple);
    /// assert_eq!(BlockColor::for_index(6), BlockColor::Blue);
    /// ```
    pub fn for_index(index: usize) -> Self {
        match index % PALETTE_LEN {
            0 => BlockColor::Blue,
            1 => BlockColor::LightBlue,
            2 => BlockColor::Green,
            3 => BlockColor::Orange,
            4 => BlockColor::Pink,
            _ => BlockColor::Purple,
        }
    }

    /// CSS hex value for render surfaces
    pub fn hex(&self) -> &'static str {
        match self {
            BlockColor::Blue => "#007AFF",
            BlockColor::LightBlue => "#5AC8FA",
            BlockColor::Green => "#34C759",
            BlockColor::Orange => "#FF9500",
            BlockColor::Pink => "#FF2D55",
            BlockColor::Purple => "#AF52DE",
        }
    }
}

/// Core-side event emitted by the placement resolver.
///
/// Consumed by the lifecycle controller (which performs the high-score
/// persistence effect when `new_high_score` is set) and by observers such
/// as render surfaces. Keeping the persistence *intent* here keeps the
/// resolver itself free of side effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementEvent {
    /// False on a miss (the terminal transition of a round)
    pub placed: bool,
    /// Whether the placement was within tolerance on both width and edge
    pub perfect: bool,
    /// Overlap width against the previous stack top (0.0 on a miss)
    pub overlap: f32,
    /// Score gained by this placement (0 on a miss)
    pub score_delta: u32,
    /// Consecutive-perfect count after this placement
    pub combo: u32,
    /// Level after this placement
    pub level: u32,
    /// Persist-high-score intent: the cumulative score now exceeds the
    /// previously recorded high score
    pub new_high_score: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playfield_constants_are_consistent() {
        assert_eq!(INITIAL_BLOCK_WIDTH, 180.0);
        assert!(MIN_BLOCK_WIDTH > 0.0);
        assert!(MIN_BLOCK_WIDTH < INITIAL_BLOCK_WIDTH);
        assert!(INITIAL_BLOCK_SPEED < MAX_BLOCK_SPEED);
        assert!(WIDTH_SHRINK_FACTOR < 1.0);
    }

    #[test]
    fn direction_flip_is_involutive() {
        assert_eq!(Direction::Left.flip().flip(), Direction::Left);
        assert_eq!(Direction::Right.flip().flip(), Direction::Right);
    }

    #[test]
    fn palette_cycles() {
        for i in 0..PALETTE_LEN {
            assert_eq!(
                BlockColor::for_index(i),
                BlockColor::for_index(i + PALETTE_LEN)
            );
        }
        assert!(BlockColor::for_index(3).hex().starts_with('#'));
    }

    #[test]
    fn phase_strings() {
        assert_eq!(Phase::NotStarted.as_str(), "not_started");
        assert_eq!(Phase::Playing.as_str(), "playing");
        assert_eq!(Phase::Over.as_str(), "over");
    }
}
