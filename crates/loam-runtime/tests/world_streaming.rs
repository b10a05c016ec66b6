use loam_blocks::BlockType;
use loam_geom::Vec3;
use loam_mesh_cpu::build_chunk_mesh;
use loam_runtime::{StreamConfig, World, circular_chunk_coords};
use loam_world::{CHUNK_SIZE, ChunkCoord, Terrain};

fn stream(load: i32, evict: i32, render: i32, budget: usize) -> StreamConfig {
    StreamConfig {
        load_radius: load,
        evict_radius: evict,
        render_radius: render,
        max_mesh_builds_per_update: budget,
    }
}

fn at_chunk(cx: i32, cz: i32) -> Vec3 {
    let s = CHUNK_SIZE as f32;
    Vec3::new(cx as f32 * s + 0.5, 40.0, cz as f32 * s + 0.5)
}

#[test]
fn first_update_loads_disc_and_builds_it() {
    let mut w = World::new(Terrain::flat(0, 4), stream(2, 3, 2, 0));
    let report = w.update(at_chunk(0, 0));
    assert!(report.recentered);
    assert_eq!(report.loaded, 13);
    assert_eq!(report.built, 13);
    assert_eq!(report.dirty_left, 0);
    for c in circular_chunk_coords(ChunkCoord::new(0, 0), 2) {
        assert!(w.chunk(c).is_some_and(|ch| !ch.is_dirty() && ch.mesh().is_some()));
    }
    assert!(!w.is_loaded(ChunkCoord::new(2, 2)));
}

#[test]
fn negative_observer_positions_floor() {
    let mut w = World::new(Terrain::flat(0, 4), stream(0, 1, 0, 0));
    w.update(Vec3::new(-0.1, 10.0, -16.0));
    assert_eq!(w.center(), Some(ChunkCoord::new(-1, -1)));
    assert!(w.is_loaded(ChunkCoord::new(-1, -1)));
    assert_eq!(w.chunk_count(), 1);
}

#[test]
fn moving_away_evicts_and_releases_meshes() {
    let mut w = World::new(Terrain::flat(0, 4), stream(1, 2, 1, 0));
    w.update(at_chunk(0, 0));
    let report = w.update(at_chunk(3, 0));
    assert!(report.evicted > 0);
    assert!(!w.is_loaded(ChunkCoord::new(0, 0)));
    assert!(!w.is_loaded(ChunkCoord::new(-1, 0)));
    // (1, 0) is exactly on the eviction rim and stays.
    assert!(w.is_loaded(ChunkCoord::new(1, 0)));
    let s = w.stats();
    assert_eq!(s.chunks_evicted, report.evicted as u64);
    assert_eq!(s.meshes_released, report.evicted as u64);
}

#[test]
fn budget_builds_nearest_first() {
    let mut w = World::new(Terrain::flat(0, 4), stream(1, 2, 1, 1));
    let first = w.update(at_chunk(0, 0));
    assert_eq!(first.built, 1);
    assert_eq!(first.dirty_left, 4);
    assert!(w.chunk(ChunkCoord::new(0, 0)).is_some_and(|c| !c.is_dirty()));
    let mut rounds = 1;
    while w.dirty_count() > 0 {
        let r = w.update(at_chunk(0, 0));
        assert_eq!(r.built, 1);
        rounds += 1;
    }
    assert_eq!(rounds, 5);
}

#[test]
fn visible_meshes_respect_render_radius() {
    let mut w = World::new(Terrain::flat(0, 4), stream(2, 3, 2, 0));
    w.update(at_chunk(0, 0));
    assert_eq!(w.visible_meshes(at_chunk(0, 0)).count(), 13);
    let near: Vec<_> = w.visible_meshes(at_chunk(2, 0)).collect();
    // (0,0), (1,0), (2,0), (1,1) and (1,-1) lie within two of (2, 0).
    assert_eq!(near.len(), 5);
    for (origin, mesh) in near {
        assert_eq!(origin, mesh.origin);
        assert_eq!(mesh.vertices().len() % loam_mesh_cpu::VERTEX_STRIDE, 0);
    }
}

#[test]
fn eviction_reopens_faces_of_survivors() {
    let mut w = World::new(Terrain::flat(0, 4), stream(1, 2, 3, 0));
    w.update(at_chunk(0, 0));
    w.update(at_chunk(2, 0));
    assert!(!w.is_loaded(ChunkCoord::new(-1, 0)));
    let chunk = w.chunk(ChunkCoord::new(0, 0)).expect("(0, 0) survives on the rim");
    assert!(!chunk.is_dirty());
    let stored = chunk.mesh().expect("flat chunk has a mesh");
    let fresh = build_chunk_mesh(chunk.buf(), &w);
    assert_eq!(stored.vertices(), fresh.vertices());
}

#[test]
fn streaming_at_the_horizontal_edges_of_the_world() {
    for x in [-3.0e9f32, 3.0e9] {
        let mut w = World::new(Terrain::flat(0, 4), stream(1, 2, 1, 0));
        let report = w.update(Vec3::new(x, 10.0, 0.5));
        let center = w.center().expect("update sets a centre");
        assert!(center.in_world());
        // One of the four neighbours lies past the edge.
        assert_eq!(report.loaded, 4);
        assert_eq!(report.built, 4);
        assert!(w.chunk(center).is_some_and(|c| c.mesh().is_some()));
        let edge_x = if x < 0.0 { i32::MIN } else { i32::MAX };
        assert_eq!(w.get_block(edge_x, 2, 0), BlockType::Stone);
        assert!(w.loaded_coords().all(ChunkCoord::in_world));
    }
}
