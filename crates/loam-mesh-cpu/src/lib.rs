//! CPU meshing: face-culled, per-block quads in a flat vertex buffer.
#![forbid(unsafe_code)]

mod chunk;
mod color;
mod face;
mod mesh_build;

pub use chunk::ChunkMeshCPU;
pub use color::{face_rgb, tint};
pub use face::Face;
pub use mesh_build::{
    COLOR_OFFSET, MeshBuild, NORMAL_OFFSET, POSITION_OFFSET, VERTEX_STRIDE, VERTICES_PER_QUAD,
};

use loam_blocks::BlockType;
use loam_chunk::{BlockSource, ChunkBuf};
use loam_geom::{Aabb, Vec3};
use std::time::Instant;

/// Neighbour block across `face`, read from `buf` when it stores the cell and
/// from `world` otherwise. Cells past the `i32` edge of the world are absent.
#[inline]
fn neighbor<S: BlockSource + ?Sized>(
    buf: &ChunkBuf,
    world: &S,
    x: usize,
    y: usize,
    z: usize,
    face: Face,
    wx: i32,
    wz: i32,
) -> Option<BlockType> {
    let (dx, dy, dz) = face.delta();
    let nx = x as i32 + dx;
    let ny = y as i32 + dy;
    let nz = z as i32 + dz;
    if (0..ChunkBuf::SX as i32).contains(&nx)
        && (0..ChunkBuf::SY as i32).contains(&ny)
        && (0..ChunkBuf::SZ as i32).contains(&nz)
    {
        return Some(buf.get_local(nx as usize, ny as usize, nz as usize));
    }
    let (Some(nwx), Some(nwz)) = (wx.checked_add(dx), wz.checked_add(dz)) else {
        return None;
    };
    world.block_at(nwx, ny, nwz)
}

/// Builds the mesh for `buf`. Faces are emitted only where the neighbouring cell
/// is non-solid or not backed by `world`. Output is a pure function of block data.
pub fn build_chunk_mesh<S: BlockSource + ?Sized>(buf: &ChunkBuf, world: &S) -> ChunkMeshCPU {
    let t0 = Instant::now();
    let (base_x, base_z) = buf.coord.origin();
    let mut build = MeshBuild::default();
    let mut lo = [i32::MAX; 3];
    let mut hi = [i32::MIN; 3];
    for y in 0..ChunkBuf::SY {
        for z in 0..ChunkBuf::SZ {
            for x in 0..ChunkBuf::SX {
                let here = buf.get_local(x, y, z);
                if !here.is_solid() {
                    continue;
                }
                let wx = base_x + x as i32;
                let wy = y as i32;
                let wz = base_z + z as i32;
                let mut emitted = false;
                for face in Face::ALL {
                    let open = neighbor(buf, world, x, y, z, face, wx, wz)
                        .is_none_or(|b| !b.is_solid());
                    if !open {
                        continue;
                    }
                    let rgb = face_rgb(here, face, wx, wy, wz);
                    build.add_face(face, x as f32, y as f32, z as f32, rgb);
                    emitted = true;
                }
                if emitted {
                    let cell = [x as i32, wy, z as i32];
                    for i in 0..3 {
                        lo[i] = lo[i].min(cell[i]);
                        hi[i] = hi[i].max(cell[i] + 1);
                    }
                }
            }
        }
    }
    let bbox = if build.is_empty() {
        Aabb::default()
    } else {
        Aabb::new(
            Vec3::new(lo[0] as f32, lo[1] as f32, lo[2] as f32),
            Vec3::new(hi[0] as f32, hi[1] as f32, hi[2] as f32),
        )
    };
    log::debug!(
        target: "perf",
        "ms={} mesh_build cx={} cz={} quads={}",
        t0.elapsed().as_millis(),
        buf.coord.cx,
        buf.coord.cz,
        build.quad_count()
    );
    ChunkMeshCPU {
        coord: buf.coord,
        origin: Vec3::new(base_x as f32, 0.0, base_z as f32),
        bbox,
        build,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loam_world::ChunkCoord;

    struct Nothing;
    impl BlockSource for Nothing {
        fn block_at(&self, _wx: i32, _wy: i32, _wz: i32) -> Option<BlockType> {
            None
        }
    }

    #[test]
    fn lone_block_emits_six_quads() {
        let mut buf = ChunkBuf::new_air(ChunkCoord::new(1, -1));
        buf.set_local(4, 10, 5, BlockType::Stone);
        let mesh = build_chunk_mesh(&buf, &Nothing);
        assert_eq!(mesh.build.quad_count(), 6);
        assert_eq!(mesh.vertex_count(), 36);
        assert_eq!(mesh.origin, Vec3::new(16.0, 0.0, -16.0));
        assert_eq!(mesh.bbox, Aabb::block(4, 10, 5));
    }

    #[test]
    fn air_chunk_is_empty() {
        let buf = ChunkBuf::new_air(ChunkCoord::new(0, 0));
        let mesh = build_chunk_mesh(&buf, &Nothing);
        assert!(mesh.is_empty());
        assert_eq!(mesh.bbox, Aabb::default());
    }
}
