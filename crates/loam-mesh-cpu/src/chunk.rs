use loam_geom::{Aabb, Vec3};
use loam_world::ChunkCoord;

use crate::mesh_build::MeshBuild;

/// Geometry of one chunk. Positions are chunk-local; draw at `origin`.
#[derive(Clone, Debug)]
pub struct ChunkMeshCPU {
    pub coord: ChunkCoord,
    /// World-space position of the chunk's `(0, 0, 0)` cell.
    pub origin: Vec3,
    /// Chunk-local bounds of the emitted geometry.
    pub bbox: Aabb,
    pub build: MeshBuild,
}

impl ChunkMeshCPU {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.build.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[f32] {
        self.build.as_slice()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.build.vertex_count()
    }
}
