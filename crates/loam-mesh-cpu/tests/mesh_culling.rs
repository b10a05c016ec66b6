use loam_blocks::BlockType;
use loam_chunk::{BlockSource, ChunkBuf, generate_chunk_buffer};
use loam_mesh_cpu::{COLOR_OFFSET, NORMAL_OFFSET, VERTEX_STRIDE, build_chunk_mesh};
use loam_world::{ChunkCoord, Terrain};

/// A tiny world made of explicit chunks; unknown cells are absent.
struct Patch(Vec<ChunkBuf>);

impl BlockSource for Patch {
    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> Option<BlockType> {
        if wy < 0 {
            return Some(BlockType::BOUNDARY);
        }
        self.0.iter().find_map(|c| c.get_world(wx, wy, wz))
    }
}

fn air(cx: i32, cz: i32) -> ChunkBuf {
    ChunkBuf::new_air(ChunkCoord::new(cx, cz))
}

#[test]
fn shared_face_between_solids_is_culled() {
    let mut buf = air(0, 0);
    buf.set_local(3, 20, 3, BlockType::Stone);
    buf.set_local(4, 20, 3, BlockType::Dirt);
    let mesh = build_chunk_mesh(&buf, &Patch(vec![]));
    assert_eq!(mesh.build.quad_count(), 10);
}

#[test]
fn surrounded_block_contributes_nothing() {
    let mut buf = air(0, 0);
    for x in 5..8 {
        for y in 30..33 {
            for z in 5..8 {
                buf.set_local(x, y, z, BlockType::Stone);
            }
        }
    }
    let full = build_chunk_mesh(&buf, &Patch(vec![]));
    // Outer skin of a 3x3x3 cube.
    assert_eq!(full.build.quad_count(), 54);
    for i in 0..full.vertex_count() {
        let p = full.build.position(i);
        let inside = p.iter().zip([5.0, 30.0, 5.0]).all(|(&c, lo)| c > lo && c < lo + 3.0);
        assert!(!inside);
    }
    buf.set_local(6, 31, 6, BlockType::Air);
    let hollow = build_chunk_mesh(&buf, &Patch(vec![]));
    assert_eq!(hollow.build.quad_count(), 60);
}

#[test]
fn faces_against_neighbouring_chunk_are_culled() {
    let mut a = air(0, 0);
    let mut b = air(1, 0);
    a.set_local(15, 12, 8, BlockType::Stone);
    b.set_local(0, 12, 8, BlockType::Stone);
    let alone = build_chunk_mesh(&a, &Patch(vec![]));
    let joined = build_chunk_mesh(&a, &Patch(vec![b]));
    assert_eq!(alone.build.quad_count(), 6);
    assert_eq!(joined.build.quad_count(), 5);
}

#[test]
fn floor_of_world_is_never_drawn() {
    let mut buf = air(-3, 2);
    buf.set_local(0, 0, 0, BlockType::Bedrock);
    let mesh = build_chunk_mesh(&buf, &Patch(vec![]));
    assert_eq!(mesh.build.quad_count(), 5);
}

#[test]
fn rebuild_is_bit_identical() {
    let t = Terrain::new(77, Default::default());
    let a = generate_chunk_buffer(&t, ChunkCoord::new(-1, 2)).buf;
    let b = generate_chunk_buffer(&t, ChunkCoord::new(0, 2)).buf;
    let world = Patch(vec![a.clone(), b]);
    let first = build_chunk_mesh(&a, &world);
    let second = build_chunk_mesh(&a, &world);
    assert!(!first.is_empty());
    assert_eq!(first.build, second.build);
    assert_eq!(first.bbox, second.bbox);
}

#[test]
fn vertex_layout_carries_unit_normals_and_clamped_colours() {
    let t = Terrain::new(5, Default::default());
    let buf = generate_chunk_buffer(&t, ChunkCoord::new(2, 2)).buf;
    let mesh = build_chunk_mesh(&buf, &Patch(vec![]));
    assert_eq!(mesh.vertices().len() % VERTEX_STRIDE, 0);
    for v in mesh.vertices().chunks_exact(VERTEX_STRIDE) {
        let n = &v[NORMAL_OFFSET..NORMAL_OFFSET + 3];
        assert_eq!(n.iter().map(|c| c.abs()).sum::<f32>(), 1.0);
        for &c in &v[COLOR_OFFSET..COLOR_OFFSET + 3] {
            assert!((0.0..=1.0).contains(&c));
        }
    }
}
