use loam_blocks::BlockType;

use crate::worldgen::WorldGenParams;

/// Chooses `(top, subsurface)` for a column whose top block sits at `top_y`.
pub fn pick_surface(params: &WorldGenParams, top_y: i32) -> (BlockType, BlockType) {
    if top_y < params.beach_below {
        (BlockType::Sand, BlockType::Sand)
    } else if top_y > params.mountain_above {
        (BlockType::Stone, BlockType::Stone)
    } else {
        (BlockType::Grass, BlockType::Dirt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_thresholds() {
        let p = WorldGenParams::default();
        assert_eq!(pick_surface(&p, p.beach_below - 1).0, BlockType::Sand);
        assert_eq!(pick_surface(&p, p.beach_below).0, BlockType::Grass);
        assert_eq!(pick_surface(&p, p.mountain_above).1, BlockType::Dirt);
        assert_eq!(pick_surface(&p, p.mountain_above + 1).0, BlockType::Stone);
    }
}
