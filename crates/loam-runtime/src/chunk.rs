use loam_chunk::ChunkBuf;
use loam_mesh_cpu::ChunkMeshCPU;
use loam_world::ChunkCoord;

/// A resident chunk: block data plus its derived mesh.
#[derive(Debug)]
pub struct Chunk {
    pub(crate) buf: ChunkBuf,
    dirty: bool,
    mesh: Option<ChunkMeshCPU>,
}

impl Chunk {
    pub(crate) fn new(buf: ChunkBuf) -> Self {
        Self {
            buf,
            dirty: true,
            mesh: None,
        }
    }

    #[inline]
    pub fn coord(&self) -> ChunkCoord {
        self.buf.coord
    }

    #[inline]
    pub fn buf(&self) -> &ChunkBuf {
        &self.buf
    }

    /// True when block data changed since the last build, or it was never built.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn mesh(&self) -> Option<&ChunkMeshCPU> {
        self.mesh.as_ref()
    }

    #[inline]
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Swaps in a fresh build. Empty builds leave no mesh behind.
    /// Returns whether a previous mesh was dropped.
    pub(crate) fn install_mesh(&mut self, mesh: ChunkMeshCPU) -> bool {
        let next = (!mesh.is_empty()).then_some(mesh);
        let released = std::mem::replace(&mut self.mesh, next).is_some();
        self.dirty = false;
        released
    }
}
