use loam_edit::affected_chunks;
use loam_world::{CHUNK_SIZE, ChunkCoord, local_xz};
use proptest::prelude::*;

proptest! {
    #[test]
    fn affected_chunks_are_owner_plus_face_neighbours(wx in -100_000i32..100_000, wz in -100_000i32..100_000) {
        let got = affected_chunks(wx, wz);
        let owner = ChunkCoord::from_world(wx, wz);
        prop_assert_eq!(got[0], owner);
        let (lx, lz) = local_xz(wx, wz);
        let on_x = lx == 0 || lx == CHUNK_SIZE - 1;
        let on_z = lz == 0 || lz == CHUNK_SIZE - 1;
        prop_assert_eq!(got.len(), 1 + on_x as usize + on_z as usize);
        for n in &got[1..] {
            prop_assert_eq!(n.distance_sq(owner), 1);
        }
    }
}
