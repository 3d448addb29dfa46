//! Scoring module - placement score, combo bonus, and level progression
//!
//! Scoring rules:
//! - Every successful placement scores 1 base point.
//! - A perfect placement adds a flat bonus of 10.
//! - From the second consecutive perfect placement onward, a combo bonus of
//!   `combo * 5` is added on top (a streak of perfects yields deltas
//!   11, 21, 26, 31, ...).
//! - Score is cumulative within a round; nothing is ever subtracted.
//!
//! Level is a step function of the stack size: it increases every fifth
//! placed block (base included) and drives the generated sweep speed.

use stack_tower_types::{
    BLOCKS_PER_LEVEL, COMBO_STEP, LEVEL_SPEED_STEP, MAX_BLOCK_SPEED, PERFECT_BONUS,
    PLACEMENT_POINTS,
};

/// Score delta for one successful placement.
///
/// `combo` is the consecutive-perfect count *after* this placement (1 for
/// the first perfect in a streak). The combo bonus only applies from the
/// second consecutive perfect onward.
pub fn placement_score(perfect: bool, combo: u32) -> u32 {
    let perfect_bonus = if perfect { PERFECT_BONUS } else { 0 };
    let combo_bonus = if combo > 1 { combo * COMBO_STEP } else { 0 };
    PLACEMENT_POINTS + perfect_bonus + combo_bonus
}

/// Level for a stack of `stack_len` blocks (base and just-placed block
/// both count). Non-decreasing within a round.
pub fn level_for(stack_len: usize) -> u32 {
    (stack_len / BLOCKS_PER_LEVEL) as u32 + 1
}

/// Sweep speed derived from a base speed and the current level, capped at
/// [`MAX_BLOCK_SPEED`]. Monotonically non-decreasing within a round since
/// both inputs are.
pub fn speed_for(base_speed: f32, level: u32) -> f32 {
    let multiplier = 1.0 + (level.saturating_sub(1)) as f32 * LEVEL_SPEED_STEP;
    (base_speed * multiplier).min(MAX_BLOCK_SPEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_placement_scores_one() {
        assert_eq!(placement_score(false, 0), 1);
    }

    #[test]
    fn first_perfect_has_no_combo_bonus() {
        assert_eq!(placement_score(true, 1), 11);
    }

    #[test]
    fn combo_bonus_applies_from_second_perfect() {
        assert_eq!(placement_score(true, 2), 21);
        assert_eq!(placement_score(true, 3), 26);
        assert_eq!(placement_score(true, 4), 31);
    }

    #[test]
    fn imperfect_placement_never_gets_bonuses() {
        // Combo has already been reset by the resolver when this is called.
        assert_eq!(placement_score(false, 0), 1);
    }

    #[test]
    fn level_steps_every_fifth_block() {
        assert_eq!(level_for(1), 1); // base only
        assert_eq!(level_for(4), 1);
        assert_eq!(level_for(5), 2);
        assert_eq!(level_for(9), 2);
        assert_eq!(level_for(10), 3);
        assert_eq!(level_for(25), 6);
    }

    #[test]
    fn speed_is_level_driven_and_capped() {
        assert_eq!(speed_for(2.0, 1), 2.0);
        assert_eq!(speed_for(2.0, 2), 2.4);
        assert_eq!(speed_for(2.0, 3), 2.8);
        assert_eq!(speed_for(2.0, 100), MAX_BLOCK_SPEED);
        // Level 0 never occurs, but saturating_sub keeps it total.
        assert_eq!(speed_for(2.0, 0), 2.0);
    }
}
