use crate::types::{FACE_COUNT, Rgb};

/// Static attributes of one block kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockDef {
    pub name: &'static str,
    pub solid: bool,
    pub faces: [Rgb; FACE_COUNT],
}

const fn uniform(c: Rgb) -> [Rgb; FACE_COUNT] {
    [c; FACE_COUNT]
}

const fn top_bottom_side(top: Rgb, bottom: Rgb, side: Rgb) -> [Rgb; FACE_COUNT] {
    [top, bottom, side, side, side, side]
}

const WHITE: Rgb = [1.0, 1.0, 1.0];
const DIRT: Rgb = [0.6, 0.4, 0.2];

/// Indexed by `BlockType as usize`.
pub static BLOCK_DEFS: [BlockDef; 9] = [
    BlockDef {
        name: "air",
        solid: false,
        faces: uniform(WHITE),
    },
    BlockDef {
        name: "grass",
        solid: true,
        faces: top_bottom_side([0.2, 0.8, 0.2], DIRT, [0.45, 0.6, 0.3]),
    },
    BlockDef {
        name: "dirt",
        solid: true,
        faces: uniform(DIRT),
    },
    BlockDef {
        name: "stone",
        solid: true,
        faces: uniform([0.5, 0.5, 0.5]),
    },
    BlockDef {
        name: "bedrock",
        solid: true,
        faces: uniform([0.1, 0.1, 0.1]),
    },
    BlockDef {
        name: "sand",
        solid: true,
        faces: uniform([0.9, 0.85, 0.6]),
    },
    BlockDef {
        name: "wood",
        solid: true,
        faces: top_bottom_side([0.4, 0.25, 0.1], [0.4, 0.25, 0.1], [0.5, 0.35, 0.2]),
    },
    BlockDef {
        name: "leaves",
        solid: true,
        faces: uniform([0.1, 0.5, 0.1]),
    },
    BlockDef {
        name: "cobblestone",
        solid: true,
        faces: uniform([0.4, 0.4, 0.4]),
    },
];
