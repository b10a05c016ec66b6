use serde::{Deserialize, Serialize};

use crate::registry::{BLOCK_DEFS, BlockDef};

/// Linear RGB in `[0, 1]`.
pub type Rgb = [f32; 3];

/// Number of faces on a block. Face indices follow `PosY, NegY, PosX, NegX, PosZ, NegZ`.
pub const FACE_COUNT: usize = 6;

/// Closed set of block kinds. The discriminant is the stable block id and the
/// index into [`BLOCK_DEFS`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum BlockType {
    #[default]
    Air = 0,
    Grass = 1,
    Dirt = 2,
    Stone = 3,
    Bedrock = 4,
    Sand = 5,
    Wood = 6,
    Leaves = 7,
    Cobblestone = 8,
}

impl BlockType {
    pub const COUNT: usize = 9;

    pub const ALL: [BlockType; Self::COUNT] = [
        BlockType::Air,
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Bedrock,
        BlockType::Sand,
        BlockType::Wood,
        BlockType::Leaves,
        BlockType::Cobblestone,
    ];

    /// Returned for every coordinate below the world floor.
    pub const BOUNDARY: BlockType = BlockType::Bedrock;

    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Unknown ids map to `Air`.
    #[inline]
    pub fn from_id(id: u8) -> BlockType {
        Self::ALL.get(id as usize).copied().unwrap_or(BlockType::Air)
    }

    #[inline]
    pub fn def(self) -> &'static BlockDef {
        &BLOCK_DEFS[self as usize]
    }

    #[inline]
    pub fn is_solid(self) -> bool {
        self.def().solid
    }

    #[inline]
    pub fn is_air(self) -> bool {
        matches!(self, BlockType::Air)
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn from_name(name: &str) -> Option<BlockType> {
        Self::ALL.iter().copied().find(|b| b.name() == name)
    }

    /// Colour of `face` (see [`FACE_COUNT`] for the index order). Out-of-range
    /// indices clamp to the last face.
    #[inline]
    pub fn face_color(self, face: usize) -> Rgb {
        self.def().faces[face.min(FACE_COUNT - 1)]
    }
}
