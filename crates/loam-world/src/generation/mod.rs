//! Per-column terrain description and decorations.

mod surface;
mod trees;

pub use surface::pick_surface;
pub use trees::{TreeSpec, hash2, rand01};

use loam_blocks::BlockType;

/// Everything needed to fill one world column without looking at its neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnProfile {
    /// Number of filled cells; the topmost solid block sits at `surface - 1`.
    pub surface: i32,
    pub top: BlockType,
    pub subsurface: BlockType,
    /// Cells of `subsurface` directly beneath the top block.
    pub topsoil_depth: i32,
}

impl ColumnProfile {
    /// Block of this column at height `y`, before decorations.
    pub fn block_at(&self, y: i32) -> BlockType {
        if y < 0 {
            return BlockType::BOUNDARY;
        }
        if y >= self.surface {
            return BlockType::Air;
        }
        if y == 0 {
            return BlockType::Bedrock;
        }
        if y == self.surface - 1 {
            return self.top;
        }
        if y >= self.surface - 1 - self.topsoil_depth {
            return self.subsurface;
        }
        BlockType::Stone
    }

    /// Y of the topmost solid block.
    #[inline]
    pub fn top_y(&self) -> i32 {
        self.surface - 1
    }
}
