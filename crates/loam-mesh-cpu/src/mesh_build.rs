use loam_blocks::Rgb;

use crate::face::Face;

/// Floats per vertex: position (3), normal (3), colour (3).
pub const VERTEX_STRIDE: usize = 9;
pub const POSITION_OFFSET: usize = 0;
pub const NORMAL_OFFSET: usize = 3;
pub const COLOR_OFFSET: usize = 6;
/// Two triangles, no index buffer.
pub const VERTICES_PER_QUAD: usize = 6;

const QUAD_ORDER: [usize; VERTICES_PER_QUAD] = [0, 1, 2, 0, 2, 3];

/// Flat, non-indexed triangle list.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    pub verts: Vec<f32>,
}

impl MeshBuild {
    /// Appends one face of the unit cell at chunk-local `(x, y, z)`.
    pub fn add_face(&mut self, face: Face, x: f32, y: f32, z: f32, rgb: Rgb) {
        let corners = face.corners(x, y, z);
        let n = face.normal();
        for &i in &QUAD_ORDER {
            let p = corners[i];
            self.verts.extend_from_slice(&[
                p[0], p[1], p[2], n.x, n.y, n.z, rgb[0], rgb[1], rgb[2],
            ]);
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.verts.len() / VERTEX_STRIDE
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.vertex_count() / VERTICES_PER_QUAD
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.verts
    }

    /// Position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        let o = i * VERTEX_STRIDE + POSITION_OFFSET;
        [self.verts[o], self.verts[o + 1], self.verts[o + 2]]
    }
}
