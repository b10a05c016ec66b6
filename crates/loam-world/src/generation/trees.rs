use loam_blocks::BlockType;

use crate::CHUNK_HEIGHT;
use crate::generation::ColumnProfile;
use crate::worldgen::WorldGenParams;

const SALT_PLACE: u32 = 0xA53F9;
const SALT_TRUNK: u32 = 0x0051_F0A7;
const SALT_CORNER: u32 = 0xC0FFEE;

pub fn hash2(ix: i32, iz: i32, seed: u32) -> u32 {
    let mut h = (ix as u32).wrapping_mul(0x85eb_ca6b)
        ^ (iz as u32).wrapping_mul(0xc2b2_ae35)
        ^ seed.wrapping_mul(0x27d4_eb2d);
    h ^= h >> 16;
    h = h.wrapping_mul(0x7feb_352d);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846c_a68b);
    h ^= h >> 16;
    h
}

/// Uniform value in `[0, 1)` for a column.
pub fn rand01(seed: u32, ix: i32, iz: i32, salt: u32) -> f32 {
    let h = hash2(ix, iz, (seed ^ salt).wrapping_add(0x9E37_79B9));
    ((h & 0x00FF_FFFF) as f32) / 16_777_216.0
}

/// A tree rooted on one column: trunk from `base_y` upward, canopy around its top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeSpec {
    pub x: i32,
    pub z: i32,
    pub base_y: i32,
    pub trunk_height: i32,
    seed: u32,
}

impl TreeSpec {
    /// Tree rooted at column `(x, z)`, if that column grows one.
    pub fn for_column(
        params: &WorldGenParams,
        seed: u32,
        x: i32,
        z: i32,
        column: &ColumnProfile,
    ) -> Option<Self> {
        if column.top != BlockType::Grass {
            return None;
        }
        if rand01(seed, x, z, SALT_PLACE) >= params.tree_probability {
            return None;
        }
        let span = (params.trunk_max - params.trunk_min).max(0) as u32;
        let trunk_height = params.trunk_min + (hash2(x, z, seed ^ SALT_TRUNK) % (span + 1)) as i32;
        let base_y = column.surface;
        if base_y <= 2 || base_y >= CHUNK_HEIGHT as i32 {
            return None;
        }
        Some(Self {
            x,
            z,
            base_y,
            trunk_height,
            seed,
        })
    }

    /// Y of the topmost trunk block; the canopy is centred one above it.
    #[inline]
    pub fn crown_y(&self) -> i32 {
        self.base_y.saturating_add(self.trunk_height)
    }

    /// Visits every block of the tree in world coordinates, trunk first.
    /// Leaves are never emitted on the trunk column. Cells outside the world's
    /// vertical range are skipped; horizontal clipping is the caller's job.
    pub fn for_each_block(&self, mut f: impl FnMut(i32, i32, i32, BlockType)) {
        let height = CHUNK_HEIGHT as i32;
        for y in self.base_y..self.crown_y() {
            if (0..height).contains(&y) {
                f(self.x, y, self.z, BlockType::Wood);
            }
        }
        let cy = self.crown_y();
        for dy in -2..=2 {
            let y = cy + dy;
            if !(0..height).contains(&y) {
                continue;
            }
            for dx in -2..=2i32 {
                for dz in -2..=2i32 {
                    if dx == 0 && dz == 0 {
                        continue;
                    }
                    // Past the i32 edge there is no column to fill.
                    let (Some(tx), Some(tz)) = (self.x.checked_add(dx), self.z.checked_add(dz))
                    else {
                        continue;
                    };
                    let keep = match dx.abs() + dz.abs() {
                        0..=2 => true,
                        3 => hash2(tx, tz, self.seed ^ SALT_CORNER ^ y as u32) & 1 == 0,
                        _ => false,
                    };
                    if keep {
                        f(tx, y, tz, BlockType::Leaves);
                    }
                }
            }
        }
    }
}
