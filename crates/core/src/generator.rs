//! Generator module - derives the next moving block from the stack
//!
//! The generator is a pure leaf: it looks only at the stack top, the stack
//! height, the travel direction the new block will sweep in, and the current
//! level. Difficulty progression lives entirely here - width shrinks after
//! imperfect placements and speed scales with level.

use crate::block::Block;
use crate::scoring::speed_for;
use stack_tower_types::{
    BlockColor, Direction, BLOCK_HEIGHT, MIN_BLOCK_WIDTH, PLAYFIELD_WIDTH, WIDTH_SHRINK_FACTOR,
};

/// Produce the block to be placed on top of the current stack.
///
/// - `top` is the last placed block and `stack_len` the number of blocks
///   already placed, base included; the new block spawns at row `stack_len`.
/// - `direction` is the direction the block will travel; it spawns fully
///   off-screen on the opposite side so it always sweeps in from outside
///   the visible bounds.
/// - Width is carried over unchanged after a perfect placement, otherwise
///   shrunk by 5% and floored at [`MIN_BLOCK_WIDTH`] so compounding shrink
///   can never make the round unplayable.
/// - Speed is the top block's speed scaled by level, capped at the maximum;
///   see [`speed_for`].
///
/// `perfect` is always false at spawn; only the placement resolver sets it.
pub fn next_block(top: &Block, stack_len: usize, direction: Direction, level: u32) -> Block {
    let width = if top.perfect {
        top.width
    } else {
        (top.width * WIDTH_SHRINK_FACTOR).max(MIN_BLOCK_WIDTH)
    };

    let x = match direction {
        Direction::Right => -width,
        Direction::Left => PLAYFIELD_WIDTH,
    };

    Block {
        id: top.id + 1,
        width,
        x,
        y: stack_len as f32 * BLOCK_HEIGHT,
        speed: speed_for(top.speed, level),
        color: BlockColor::for_index(stack_len),
        perfect: false,
    }
}
