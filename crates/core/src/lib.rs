//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains all the tower rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, persistence, or I/O, making it:
//!
//! - **Deterministic**: the same tick/place sequence produces identical rounds
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//! - **Total**: every operation degrades to a no-op in inapplicable states
//!
//! # Module Structure
//!
//! - [`block`]: the rectangular slab and its horizontal-overlap geometry
//! - [`generator`]: derives the next moving block from the stack top
//! - [`motion`]: one-directional sweep of the current block across the playfield
//! - [`scoring`]: placement score, combo bonus, and level progression
//! - [`game_state`]: the state machine tying the pieces together
//! - [`snapshot`]: plain view of the state for render surfaces
//!
//! # Game Rules
//!
//! - **Sweep motion**: the current block travels across the full playfield
//!   and teleports to the opposite edge; it never bounces, and its travel
//!   direction only flips on a successful placement.
//! - **Overlap placement**: placing trims the block to its horizontal
//!   intersection with the stack top; a disjoint placement ends the round.
//! - **Perfect placements**: within a 5-unit tolerance on both width and
//!   left edge; they preserve block width and feed the combo streak.
//! - **Progressive difficulty**: width shrinks 5% per imperfect placement
//!   (floored at 30 units) and speed grows 20% per level (capped at 8).
//!
//! # Example
//!
//! ```
//! use stack_tower_core::GameState;
//!
//! // Create and start a round
//! let mut game = GameState::new(0);
//! game.start();
//!
//! // The driver sweeps the current block on a fixed cadence until it
//! // crosses the stack...
//! for _ in 0..150 {
//!     game.tick();
//! }
//! // ...and resolves a placement on each user gesture.
//! game.place();
//!
//! assert!(game.score() >= 1);
//! ```

pub mod block;
pub mod game_state;
pub mod generator;
pub mod motion;
pub mod scoring;
pub mod snapshot;

pub use stack_tower_types as types;

// Re-export commonly used items for convenience
pub use block::{overlap_width, Block};
pub use game_state::GameState;
pub use generator::next_block;
pub use motion::sweep;
pub use scoring::{level_for, placement_score};
pub use snapshot::GameSnapshot;
