use serde::{Deserialize, Serialize};

use crate::CHUNK_SIZE;

/// Column coordinate of a chunk on the XZ plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoord {
    /// Lowest chunk index whose columns are addressable with `i32` world coordinates.
    pub const MIN_INDEX: i32 = i32::MIN.div_euclid(CHUNK_SIZE as i32);
    pub const MAX_INDEX: i32 = i32::MAX.div_euclid(CHUNK_SIZE as i32);

    #[inline]
    pub const fn new(cx: i32, cz: i32) -> Self {
        Self { cx, cz }
    }

    /// Chunk owning world column `(wx, wz)`. Floor division, so `-1` maps to chunk `-1`.
    #[inline]
    pub fn from_world(wx: i32, wz: i32) -> Self {
        let s = CHUNK_SIZE as i32;
        Self {
            cx: wx.div_euclid(s),
            cz: wz.div_euclid(s),
        }
    }

    /// Chunk containing a continuous position (e.g. the observer).
    #[inline]
    pub fn from_position(x: f32, z: f32) -> Self {
        Self::from_world(x.floor() as i32, z.floor() as i32)
    }

    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> Self {
        Self {
            cx: self.cx.saturating_add(dx),
            cz: self.cz.saturating_add(dz),
        }
    }

    /// Whether every column of this chunk has an `i32` world coordinate.
    #[inline]
    pub fn in_world(self) -> bool {
        let r = Self::MIN_INDEX..=Self::MAX_INDEX;
        r.contains(&self.cx) && r.contains(&self.cz)
    }

    #[inline]
    pub fn distance_sq(self, other: ChunkCoord) -> i64 {
        let dx = i64::from(self.cx) - i64::from(other.cx);
        let dz = i64::from(self.cz) - i64::from(other.cz);
        dx * dx + dz * dz
    }

    /// Packs both signed coordinates into one map key: `cx` in the high half,
    /// `cz` (as unsigned bits) in the low half.
    #[inline]
    pub fn key(self) -> u64 {
        ((self.cx as u32 as u64) << 32) | (self.cz as u32 as u64)
    }

    #[inline]
    pub fn from_key(key: u64) -> Self {
        Self {
            cx: (key >> 32) as u32 as i32,
            cz: key as u32 as i32,
        }
    }

    /// World-space coordinates of the chunk's `(0, 0)` column.
    #[inline]
    pub fn origin(self) -> (i32, i32) {
        let s = CHUNK_SIZE as i32;
        (self.cx.saturating_mul(s), self.cz.saturating_mul(s))
    }

    /// The four chunks sharing a vertical face with this one.
    #[inline]
    pub fn face_neighbors(self) -> [ChunkCoord; 4] {
        [
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
        ]
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<ChunkCoord> for (i32, i32) {
    fn from(value: ChunkCoord) -> Self {
        (value.cx, value.cz)
    }
}

/// Chunk-local column of world column `(wx, wz)` (floor modulo).
#[inline]
pub fn local_xz(wx: i32, wz: i32) -> (usize, usize) {
    let s = CHUNK_SIZE as i32;
    (wx.rem_euclid(s) as usize, wz.rem_euclid(s) as usize)
}
