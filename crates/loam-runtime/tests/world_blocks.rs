use loam_blocks::BlockType;
use loam_edit::{EditCommand, EditOutcome, RejectReason};
use loam_geom::{Aabb, Vec3};
use loam_runtime::{Chunk, StreamConfig, World};
use loam_world::{CHUNK_HEIGHT, ChunkCoord, Terrain};

fn world() -> World {
    World::new(
        Terrain::flat(3, 11),
        StreamConfig {
            load_radius: 1,
            evict_radius: 3,
            render_radius: 2,
            max_mesh_builds_per_update: 0,
        },
    )
}

fn dirty(w: &World, cx: i32, cz: i32) -> bool {
    w.chunk(ChunkCoord::new(cx, cz)).is_some_and(Chunk::is_dirty)
}

#[test]
fn set_then_get_at_origin_and_below_floor() {
    let mut w = world();
    w.set_block(0, 0, 0, BlockType::Stone);
    assert_eq!(w.get_block(0, 0, 0), BlockType::Stone);
    assert_eq!(w.get_block(0, -1, 0), BlockType::BOUNDARY);
    assert!(w.is_loaded(ChunkCoord::new(0, 0)));
}

#[test]
fn out_of_range_y_is_a_no_op() {
    let mut w = world();
    w.set_block(4, -1, 4, BlockType::Sand);
    w.set_block(4, CHUNK_HEIGHT as i32, 4, BlockType::Sand);
    assert_eq!(w.chunk_count(), 0);
    assert_eq!(w.get_block(4, CHUNK_HEIGHT as i32, 4), BlockType::Air);
    assert!(!w.is_solid_block(4, CHUNK_HEIGHT as i32 + 50, 4));
    assert!(w.is_solid_block(4, -7, 4));
}

#[test]
fn round_trip_includes_air_and_negative_columns() {
    let mut w = world();
    for (i, &b) in BlockType::ALL.iter().enumerate() {
        let x = -33 + i as i32 * 5;
        let z = -1 - i as i32 * 7;
        let y = (i as i32 * 13) % CHUNK_HEIGHT as i32;
        w.set_block(x, y, z, b);
        assert_eq!(w.get_block(x, y, z), b);
    }
    w.set_block(-1, 5, -1, BlockType::Air);
    assert_eq!(w.get_block(-1, 5, -1), BlockType::Air);
    assert!(w.is_loaded(ChunkCoord::new(-1, -1)));
}

#[test]
fn boundary_edit_dirties_face_neighbours_only() {
    let mut w = world();
    w.update(Vec3::new(8.0, 20.0, 8.0));
    for (cx, cz) in [(-1, -1), (1, 1), (1, -1), (-1, 1)] {
        w.ensure_chunk(ChunkCoord::new(cx, cz));
    }
    w.update(Vec3::new(8.0, 20.0, 8.0));
    w.update(Vec3::new(8.0, 20.0, 8.0));
    assert_eq!(w.dirty_count(), 0);

    // Local (15, 0) of chunk (0, 0): touches +X and -Z, not the diagonal.
    w.set_block(15, 20, 0, BlockType::Cobblestone);
    assert!(dirty(&w, 0, 0));
    assert!(dirty(&w, 1, 0));
    assert!(dirty(&w, 0, -1));
    assert!(!dirty(&w, 1, -1));
    assert!(!dirty(&w, -1, 0));
    assert!(!dirty(&w, 0, 1));

    // Same observer chunk: no rescan, but dirty meshes still rebuild.
    let before = w.stats().recenters;
    let report = w.update(Vec3::new(9.0, 20.0, 9.0));
    assert!(!report.recentered);
    assert_eq!(w.stats().recenters, before);
    assert_eq!(report.built, 3);
    assert!(!dirty(&w, 0, 0));
}

#[test]
fn interior_edit_dirties_only_its_chunk() {
    let mut w = world();
    w.update(Vec3::new(0.5, 20.0, 0.5));
    w.set_block(7, 11, 7, BlockType::Wood);
    assert!(dirty(&w, 0, 0));
    assert_eq!(w.dirty_count(), 1);
}

#[test]
fn placement_overlapping_actor_leaves_world_unchanged() {
    let mut w = world();
    w.update(Vec3::new(0.5, 11.0, 0.5));
    let actor = Aabb::from_feet(Vec3::new(0.5, 11.0, 0.5), 0.3, 1.75);
    let outcome = w.apply_edit(
        EditCommand::Place {
            x: 0,
            y: 12,
            z: 0,
            block: BlockType::Stone,
        },
        Some(&actor),
    );
    assert_eq!(outcome, EditOutcome::Rejected(RejectReason::OverlapsActor));
    assert_eq!(w.get_block(0, 12, 0), BlockType::Air);
    assert_eq!(w.dirty_count(), 0);
    assert_eq!(w.stats().edits_rejected, 1);
}

#[test]
fn break_then_place_round_trip() {
    let mut w = world();
    w.update(Vec3::new(0.5, 11.0, 0.5));
    let broke = w.apply_edit(EditCommand::Break { x: 3, y: 10, z: 3 }, None);
    assert_eq!(
        broke,
        EditOutcome::Applied {
            x: 3,
            y: 10,
            z: 3,
            previous: BlockType::Stone,
            block: BlockType::Air
        }
    );
    let again = w.apply_edit(EditCommand::Break { x: 3, y: 10, z: 3 }, None);
    assert_eq!(again, EditOutcome::Rejected(RejectReason::NothingToBreak));
    let placed = w.apply_edit(
        EditCommand::Place {
            x: 3,
            y: 10,
            z: 3,
            block: BlockType::Leaves,
        },
        None,
    );
    assert!(placed.is_applied());
    assert_eq!(w.get_block(3, 10, 3), BlockType::Leaves);
    assert_eq!(w.stats().edits_applied, 2);
}
