//! Motion module - one-directional sweep of the current block
//!
//! The moving block does not ping-pong. It sweeps across the playfield in
//! one direction and, once it has fully left the visible bounds, teleports
//! back to just off the opposite edge and sweeps again. The travel
//! direction itself only changes on a successful placement, never here.

use crate::block::Block;
use stack_tower_types::{Direction, PLAYFIELD_WIDTH};

/// Advance a block one tick along its sweep path.
///
/// Wrap policy: a rightward block whose left edge passes the playfield's
/// right boundary teleports to `x = -width`; a leftward block whose right
/// edge passes the left boundary teleports to `x = PLAYFIELD_WIDTH`. No
/// clamping, no bouncing.
pub fn sweep(block: Block, direction: Direction) -> Block {
    match direction {
        Direction::Right => {
            let x = block.x + block.speed;
            if x > PLAYFIELD_WIDTH {
                Block { x: -block.width, ..block }
            } else {
                Block { x, ..block }
            }
        }
        Direction::Left => {
            let x = block.x - block.speed;
            if x + block.width < 0.0 {
                Block { x: PLAYFIELD_WIDTH, ..block }
            } else {
                Block { x, ..block }
            }
        }
    }
}
