use loam_blocks::{BLOCK_DEFS, BlockType, FACE_COUNT};
use proptest::prelude::*;

#[test]
fn air_is_the_only_non_solid_block() {
    let non_solid: Vec<_> = BlockType::ALL.iter().filter(|b| !b.is_solid()).collect();
    assert_eq!(non_solid, vec![&BlockType::Air]);
}

#[test]
fn table_matches_enum_order() {
    assert_eq!(BLOCK_DEFS.len(), BlockType::COUNT);
    for (i, b) in BlockType::ALL.iter().enumerate() {
        assert_eq!(b.id() as usize, i);
        assert_eq!(b.def().name, BLOCK_DEFS[i].name);
    }
}

#[test]
fn names_round_trip() {
    for b in BlockType::ALL {
        assert_eq!(BlockType::from_name(b.name()), Some(b));
    }
    assert_eq!(BlockType::from_name("obsidian"), None);
}

#[test]
fn grass_top_differs_from_sides() {
    let top = BlockType::Grass.face_color(0);
    let bottom = BlockType::Grass.face_color(1);
    let side = BlockType::Grass.face_color(2);
    assert_ne!(top, side);
    assert_eq!(bottom, BlockType::Dirt.face_color(0));
    for f in 2..FACE_COUNT {
        assert_eq!(BlockType::Grass.face_color(f), side);
    }
}

#[test]
fn boundary_sentinel_is_solid() {
    assert!(BlockType::BOUNDARY.is_solid());
}

#[test]
fn deserializes_from_lowercase_names() {
    #[derive(serde::Deserialize)]
    struct Pick {
        block: BlockType,
    }
    let p: Pick = toml::from_str("block = \"cobblestone\"").unwrap();
    assert_eq!(p.block, BlockType::Cobblestone);
    assert!(toml::from_str::<Pick>("block = \"Cobblestone\"").is_err());
}

proptest! {
    // from_id never panics and inverts id() for valid ids
    #[test]
    fn from_id_total(id in any::<u8>()) {
        let b = BlockType::from_id(id);
        if (id as usize) < BlockType::COUNT {
            prop_assert_eq!(b.id(), id);
        } else {
            prop_assert_eq!(b, BlockType::Air);
        }
    }

    // Every face colour stays inside the unit cube, including clamped indices
    #[test]
    fn face_colors_in_range(id in 0u8..9, face in 0usize..16) {
        let c = BlockType::from_id(id).face_color(face);
        for ch in c {
            prop_assert!((0.0..=1.0).contains(&ch));
        }
    }
}
