//! Dense chunk storage, block read capability, and chunk generation.
#![forbid(unsafe_code)]

use loam_blocks::BlockType;
use loam_world::{CHUNK_HEIGHT, CHUNK_SIZE, ChunkCoord, Terrain};

/// Number of cells in one chunk.
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_HEIGHT * CHUNK_SIZE;

/// Read-only block lookup in world coordinates. `None` means the cell is not
/// backed by any loaded storage.
pub trait BlockSource {
    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> Option<BlockType>;

    #[inline]
    fn is_solid_at(&self, wx: i32, wy: i32, wz: i32) -> bool {
        self.block_at(wx, wy, wz).is_some_and(BlockType::is_solid)
    }
}

#[derive(Clone, Debug)]
pub struct ChunkBuf {
    pub coord: ChunkCoord,
    pub blocks: Vec<BlockType>,
}

impl ChunkBuf {
    pub const SX: usize = CHUNK_SIZE;
    pub const SY: usize = CHUNK_HEIGHT;
    pub const SZ: usize = CHUNK_SIZE;

    pub fn new_air(coord: ChunkCoord) -> Self {
        Self {
            coord,
            blocks: vec![BlockType::Air; CHUNK_VOLUME],
        }
    }

    #[inline]
    pub fn idx(x: usize, y: usize, z: usize) -> usize {
        (y * Self::SZ + z) * Self::SX + x
    }

    #[inline]
    pub fn get_local(&self, x: usize, y: usize, z: usize) -> BlockType {
        self.blocks[Self::idx(x, y, z)]
    }

    #[inline]
    pub fn set_local(&mut self, x: usize, y: usize, z: usize, block: BlockType) {
        let i = Self::idx(x, y, z);
        self.blocks[i] = block;
    }

    /// Local cell of a world position, if this chunk stores it.
    #[inline]
    pub fn local_of(&self, wx: i32, wy: i32, wz: i32) -> Option<(usize, usize, usize)> {
        if wy < 0 || wy >= Self::SY as i32 {
            return None;
        }
        let (bx, bz) = self.coord.origin();
        let lx = wx.wrapping_sub(bx);
        let lz = wz.wrapping_sub(bz);
        if !(0..Self::SX as i32).contains(&lx) || !(0..Self::SZ as i32).contains(&lz) {
            return None;
        }
        Some((lx as usize, wy as usize, lz as usize))
    }

    #[inline]
    pub fn get_world(&self, wx: i32, wy: i32, wz: i32) -> Option<BlockType> {
        self.local_of(wx, wy, wz)
            .map(|(x, y, z)| self.get_local(x, y, z))
    }

    /// Writes a block if the position falls inside this chunk. Returns whether it did.
    #[inline]
    pub fn set_world(&mut self, wx: i32, wy: i32, wz: i32, block: BlockType) -> bool {
        match self.local_of(wx, wy, wz) {
            Some((x, y, z)) => {
                self.set_local(x, y, z, block);
                true
            }
            None => false,
        }
    }

    pub fn count_solid(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_solid()).count()
    }
}

impl BlockSource for ChunkBuf {
    #[inline]
    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> Option<BlockType> {
        self.get_world(wx, wy, wz)
    }
}

#[derive(Clone, Debug)]
pub struct ChunkGenerateResult {
    pub buf: ChunkBuf,
    pub trees: u32,
}

/// Fills a chunk from the terrain generator. Trees rooted in this chunk are
/// clipped at its walls; trees rooted elsewhere never reach into it.
pub fn generate_chunk_buffer(terrain: &Terrain, coord: ChunkCoord) -> ChunkGenerateResult {
    let mut buf = ChunkBuf::new_air(coord);
    let (base_x, base_z) = coord.origin();
    let mut trees = 0u32;
    for z in 0..ChunkBuf::SZ {
        for x in 0..ChunkBuf::SX {
            let wx = base_x + x as i32;
            let wz = base_z + z as i32;
            let column = terrain.column(wx, wz);
            let top = column.surface.clamp(0, ChunkBuf::SY as i32) as usize;
            for y in 0..top {
                buf.set_local(x, y, z, column.block_at(y as i32));
            }
        }
    }
    // Second pass so canopies see every column's terrain.
    for z in 0..ChunkBuf::SZ {
        for x in 0..ChunkBuf::SX {
            let wx = base_x + x as i32;
            let wz = base_z + z as i32;
            let column = terrain.column(wx, wz);
            let Some(tree) = terrain.tree_at(wx, wz, &column) else {
                continue;
            };
            trees += 1;
            tree.for_each_block(|tx, ty, tz, block| {
                let Some((lx, ly, lz)) = buf.local_of(tx, ty, tz) else {
                    return;
                };
                if block == BlockType::Leaves && !buf.get_local(lx, ly, lz).is_air() {
                    return;
                }
                buf.set_local(lx, ly, lz, block);
            });
        }
    }
    ChunkGenerateResult { buf, trees }
}
