use loam_blocks::{BlockType, Rgb};

use crate::face::Face;

/// Per-position brightness jitter in `[-0.05, 0.05]`, stable across rebuilds.
#[inline]
pub fn tint(wx: i32, wy: i32, wz: i32) -> f32 {
    let mut h = wx
        .wrapping_mul(734_287)
        .wrapping_add(wy.wrapping_mul(912_271))
        .wrapping_add(wz.wrapping_mul(523_287));
    h = (h ^ (h >> 13)) & 0xFF;
    (h as f32 / 255.0 - 0.5) * 0.1
}

/// Final vertex colour for one face of `block` located at world cell `(wx, wy, wz)`.
pub fn face_rgb(block: BlockType, face: Face, wx: i32, wy: i32, wz: i32) -> Rgb {
    let base = block.face_color(face.index());
    let v = tint(wx, wy, wz);
    let s = face.shade();
    base.map(|c| (c + v).clamp(0.0, 1.0) * s)
}
