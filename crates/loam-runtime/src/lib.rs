//! World runtime: chunk residency, block access, streaming and mesh upkeep.
#![forbid(unsafe_code)]

mod chunk;
mod stats;
mod stream;

pub use chunk::Chunk;
pub use stats::{UpdateReport, WorldStats};
pub use stream::{StreamConfig, circular_chunk_coords};

use std::time::Instant;

use hashbrown::{HashMap, HashSet};
use loam_blocks::BlockType;
use loam_chunk::{BlockSource, generate_chunk_buffer};
use loam_edit::{EditCommand, EditOutcome, affected_chunks, validate};
use loam_geom::{Aabb, Vec3};
use loam_mesh_cpu::{ChunkMeshCPU, build_chunk_mesh};
use loam_world::{CHUNK_HEIGHT, ChunkCoord, Terrain, local_xz};

/// Sole owner of every resident chunk.
pub struct World {
    terrain: Terrain,
    stream: StreamConfig,
    chunks: HashMap<u64, Chunk>,
    /// Keys of resident chunks whose `dirty` flag is set.
    pending: HashSet<u64>,
    center: Option<ChunkCoord>,
    stats: WorldStats,
}

impl World {
    pub fn new(terrain: Terrain, stream: StreamConfig) -> Self {
        let sane = stream.sanitized();
        if sane != stream {
            log::warn!(
                "stream radii adjusted: load={} evict={} render={}",
                sane.load_radius,
                sane.evict_radius,
                sane.render_radius
            );
        }
        Self {
            terrain,
            stream: sane,
            chunks: HashMap::new(),
            pending: HashSet::new(),
            center: None,
            stats: WorldStats::default(),
        }
    }

    #[inline]
    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    #[inline]
    pub fn stream_config(&self) -> &StreamConfig {
        &self.stream
    }

    /// Observer chunk of the last streaming pass.
    #[inline]
    pub fn center(&self) -> Option<ChunkCoord> {
        self.center
    }

    #[inline]
    pub fn stats(&self) -> WorldStats {
        self.stats
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn dirty_count(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord.key())
    }

    #[inline]
    pub fn is_loaded(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord.key())
    }

    pub fn loaded_coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.chunks.values().map(Chunk::coord)
    }

    /// Block at a world cell. Never loads: unloaded columns read as air.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockType {
        if y < 0 {
            return BlockType::BOUNDARY;
        }
        if y >= CHUNK_HEIGHT as i32 {
            return BlockType::Air;
        }
        let key = ChunkCoord::from_world(x, z).key();
        match self.chunks.get(&key) {
            Some(c) => {
                let (lx, lz) = local_xz(x, z);
                c.buf.get_local(lx, y as usize, lz)
            }
            None => BlockType::Air,
        }
    }

    #[inline]
    pub fn is_solid_block(&self, x: i32, y: i32, z: i32) -> bool {
        self.get_block(x, y, z).is_solid()
    }

    /// Writes a block, generating the owning chunk first if needed, and marks
    /// every chunk whose mesh can see the cell dirty. Out-of-range `y` is ignored.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockType) {
        if !(0..CHUNK_HEIGHT as i32).contains(&y) {
            return;
        }
        let coord = ChunkCoord::from_world(x, z);
        self.ensure_chunk(coord);
        let (lx, lz) = local_xz(x, z);
        if let Some(c) = self.chunks.get_mut(&coord.key()) {
            c.buf.set_local(lx, y as usize, lz, block);
        }
        for affected in affected_chunks(x, z) {
            self.mark_dirty(affected);
        }
    }

    /// Generates `coord` if it is not resident. Returns whether it was created.
    /// Chunks past the edge of the world are never created.
    pub fn ensure_chunk(&mut self, coord: ChunkCoord) -> bool {
        let key = coord.key();
        if !coord.in_world() || self.chunks.contains_key(&key) {
            return false;
        }
        let generated = generate_chunk_buffer(&self.terrain, coord);
        log::trace!(
            target: "perf",
            "chunk_gen cx={} cz={} solid={} trees={}",
            coord.cx,
            coord.cz,
            generated.buf.count_solid(),
            generated.trees
        );
        self.stats.chunks_generated += 1;
        self.stats.trees_planted += u64::from(generated.trees);
        self.chunks.insert(key, Chunk::new(generated.buf));
        self.pending.insert(key);
        // Faces that were open toward the missing chunk may now be hidden.
        for n in coord.face_neighbors() {
            self.mark_dirty(n);
        }
        true
    }

    fn mark_dirty(&mut self, coord: ChunkCoord) {
        let key = coord.key();
        if let Some(c) = self.chunks.get_mut(&key) {
            c.mark_dirty();
            self.pending.insert(key);
        }
    }

    fn evict(&mut self, key: u64) -> bool {
        let Some(chunk) = self.chunks.remove(&key) else {
            return false;
        };
        self.pending.remove(&key);
        self.stats.chunks_evicted += 1;
        if chunk.mesh().is_some() {
            self.stats.meshes_released += 1;
        }
        // Survivors must reopen the faces that were hidden by this chunk.
        for n in chunk.coord().face_neighbors() {
            self.mark_dirty(n);
        }
        true
    }

    /// Streams chunks around `observer` and rebuilds dirty meshes in render range.
    pub fn update(&mut self, observer: Vec3) -> UpdateReport {
        let center = ChunkCoord::from_position(observer.x, observer.z);
        self.stats.stream_updates += 1;
        let mut report = UpdateReport::default();
        if self.center != Some(center) {
            let t0 = Instant::now();
            if let Some(prev) = self.center {
                log::info!(
                    target: "events",
                    "ViewCenterChanged cc=({}, {}) -> ({}, {})",
                    prev.cx,
                    prev.cz,
                    center.cx,
                    center.cz
                );
            }
            self.center = Some(center);
            self.stats.recenters += 1;
            report.recentered = true;
            for coord in circular_chunk_coords(center, self.stream.load_radius) {
                if self.ensure_chunk(coord) {
                    report.loaded += 1;
                }
            }
            let stale: Vec<u64> = self
                .chunks
                .values()
                .map(Chunk::coord)
                .filter(|&c| self.stream.beyond_evict(center, c))
                .map(ChunkCoord::key)
                .collect();
            for key in stale {
                if self.evict(key) {
                    report.evicted += 1;
                }
            }
            log::info!(
                target: "perf",
                "ms={} stream_update cc=({}, {}) loaded={} evicted={} resident={}",
                t0.elapsed().as_millis(),
                center.cx,
                center.cz,
                report.loaded,
                report.evicted,
                self.chunks.len()
            );
        }
        report.built = self.rebuild_dirty(center);
        report.dirty_left = self.pending.len();
        report
    }

    /// Builds meshes for dirty chunks within render range of `center`,
    /// nearest first, honouring the per-update budget.
    fn rebuild_dirty(&mut self, center: ChunkCoord) -> usize {
        let mut queue: Vec<(i64, u64)> = self
            .pending
            .iter()
            .map(|&k| (center.distance_sq(ChunkCoord::from_key(k)), k))
            .filter(|&(_, k)| self.stream.within_render(center, ChunkCoord::from_key(k)))
            .collect();
        queue.sort_unstable();
        let budget = match self.stream.max_mesh_builds_per_update {
            0 => usize::MAX,
            n => n,
        };
        let mut built = 0;
        for (_, key) in queue.into_iter().take(budget) {
            let world: &World = self;
            let Some(chunk) = world.chunks.get(&key) else {
                self.pending.remove(&key);
                continue;
            };
            let mesh = build_chunk_mesh(&chunk.buf, world);
            let empty = mesh.is_empty();
            if let Some(chunk) = self.chunks.get_mut(&key) {
                if chunk.install_mesh(mesh) {
                    self.stats.meshes_released += 1;
                }
            }
            self.pending.remove(&key);
            self.stats.meshes_built += 1;
            if empty {
                self.stats.meshes_empty += 1;
            }
            built += 1;
        }
        built
    }

    /// Non-empty meshes of resident chunks within render range of `observer`,
    /// paired with their world-space origin.
    pub fn visible_meshes(&self, observer: Vec3) -> impl Iterator<Item = (Vec3, &ChunkMeshCPU)> + '_ {
        let center = ChunkCoord::from_position(observer.x, observer.z);
        let stream = self.stream;
        self.chunks
            .values()
            .filter(move |c| stream.within_render(center, c.coord()))
            .filter_map(|c| c.mesh())
            .map(|m| (m.origin, m))
    }

    /// Validates and applies an edit. `actor` is the box placements must avoid.
    pub fn apply_edit(&mut self, cmd: EditCommand, actor: Option<&Aabb>) -> EditOutcome {
        let (x, y, z) = cmd.target();
        let previous = self.get_block(x, y, z);
        match validate(&cmd, previous, actor) {
            Ok(block) => {
                self.set_block(x, y, z, block);
                self.stats.edits_applied += 1;
                log::info!(
                    target: "events",
                    "EditApplied ({}, {}, {}) {} -> {}",
                    x,
                    y,
                    z,
                    previous.name(),
                    block.name()
                );
                EditOutcome::Applied {
                    x,
                    y,
                    z,
                    previous,
                    block,
                }
            }
            Err(reason) => {
                self.stats.edits_rejected += 1;
                log::debug!(target: "events", "EditRejected ({}, {}, {}) {:?}", x, y, z, reason);
                EditOutcome::Rejected(reason)
            }
        }
    }

    /// Drops every chunk and mesh.
    pub fn clear(&mut self) {
        let released = self.chunks.values().filter(|c| c.mesh().is_some()).count();
        self.stats.meshes_released += released as u64;
        self.chunks.clear();
        self.pending.clear();
        self.center = None;
    }
}

impl BlockSource for World {
    /// Loaded cells, plus the fixed answers above and below the world.
    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> Option<BlockType> {
        if wy < 0 {
            return Some(BlockType::BOUNDARY);
        }
        if wy >= CHUNK_HEIGHT as i32 {
            return Some(BlockType::Air);
        }
        let key = ChunkCoord::from_world(wx, wz).key();
        self.chunks.get(&key).map(|c| {
            let (lx, lz) = local_xz(wx, wz);
            c.buf.get_local(lx, wy as usize, lz)
        })
    }
}
