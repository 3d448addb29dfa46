//! Block module - the rectangular slab and its overlap geometry
//!
//! A block is one horizontal slab of the tower. Vertical position is fixed
//! forever at placement time (`y = stack index * BLOCK_HEIGHT`); all of the
//! interesting geometry is one-dimensional, along the x axis.

use stack_tower_types::{BlockColor, BLOCK_HEIGHT, INITIAL_BLOCK_SPEED, INITIAL_BLOCK_WIDTH, PLAYFIELD_WIDTH};

/// One rectangular slab, either placed in the stack or in flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    /// Monotonically increasing id, assigned in placement order; the
    /// immovable base is id 0
    pub id: u32,
    /// Horizontal extent, same unit as the playfield width
    pub width: f32,
    /// Left edge
    pub x: f32,
    /// Vertical offset from the base; never changes after placement
    pub y: f32,
    /// Sweep speed in units per tick; fixed once the block is spawned
    pub speed: f32,
    /// Cosmetic only
    pub color: BlockColor,
    /// True iff this block was placed within tolerance of the block below
    pub perfect: bool,
}

impl Block {
    /// The immovable base block: full initial width, centered, row 0.
    ///
    /// The base carries the initial sweep speed so that the generator has a
    /// starting value to scale from; the base itself never moves.
    pub fn base() -> Self {
        Self {
            id: 0,
            width: INITIAL_BLOCK_WIDTH,
            x: (PLAYFIELD_WIDTH - INITIAL_BLOCK_WIDTH) / 2.0,
            y: 0.0,
            speed: INITIAL_BLOCK_SPEED,
            color: BlockColor::for_index(0),
            perfect: false,
        }
    }

    /// Right edge (`x + width`)
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Stack row derived from the vertical offset
    pub fn row(&self) -> usize {
        (self.y / BLOCK_HEIGHT) as usize
    }
}

/// Horizontal overlap between the current block's span and the stack top's
/// span, using the symmetric two-sided clamp:
///
/// `min(max(0, top_right - cur_x), max(0, cur_right - top_x))`
///
/// Yields zero (or a negative value) when the spans are disjoint on either
/// side, and the width of the intersection when the spans straddle each
/// other. When one span contains the other, the clamp measures edge-to-edge
/// distances and reads wider than the bare intersection; the resolver keeps
/// that slack so a block dropped inside the stack top is not trimmed down.
pub fn overlap_width(current: &Block, top: &Block) -> f32 {
    let left_overlap = (top.right() - current.x).max(0.0);
    let right_overlap = (current.right() - top.x).max(0.0);
    left_overlap.min(right_overlap)
}
