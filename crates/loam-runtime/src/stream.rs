use loam_world::ChunkCoord;

/// Streaming radii, in chunks, measured on the XZ plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamConfig {
    pub load_radius: i32,
    /// Strictly greater than `load_radius`.
    pub evict_radius: i32,
    pub render_radius: i32,
    /// Mesh builds allowed per update; 0 means no limit.
    pub max_mesh_builds_per_update: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            load_radius: 4,
            evict_radius: 6,
            render_radius: 5,
            max_mesh_builds_per_update: 0,
        }
    }
}

impl StreamConfig {
    /// Forces `0 <= load < evict` and `render >= load`.
    pub fn sanitized(self) -> Self {
        let load_radius = self.load_radius.max(0);
        Self {
            load_radius,
            evict_radius: self.evict_radius.max(load_radius + 1),
            render_radius: self.render_radius.max(load_radius),
            max_mesh_builds_per_update: self.max_mesh_builds_per_update,
        }
    }

    #[inline]
    pub fn beyond_evict(&self, center: ChunkCoord, c: ChunkCoord) -> bool {
        center.distance_sq(c) > sq(self.evict_radius)
    }

    #[inline]
    pub fn within_render(&self, center: ChunkCoord, c: ChunkCoord) -> bool {
        center.distance_sq(c) <= sq(self.render_radius)
    }
}

#[inline]
fn sq(r: i32) -> i64 {
    i64::from(r) * i64::from(r)
}

/// Every chunk coordinate inside the disc of `radius` around `center`, minus
/// those past the edge of the world.
pub fn circular_chunk_coords(center: ChunkCoord, radius: i32) -> Vec<ChunkCoord> {
    if radius < 0 {
        return Vec::new();
    }
    let mut coords = Vec::new();
    let r_sq = sq(radius);
    for dz in -radius..=radius {
        for dx in -radius..=radius {
            let dist_sq = i64::from(dx) * i64::from(dx) + i64::from(dz) * i64::from(dz);
            let c = center.offset(dx, dz);
            if dist_sq <= r_sq && c.in_world() {
                coords.push(c);
            }
        }
    }
    coords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_counts() {
        let c = ChunkCoord::new(-3, 9);
        assert_eq!(circular_chunk_coords(c, 0), vec![c]);
        assert_eq!(circular_chunk_coords(c, 1).len(), 5);
        assert_eq!(circular_chunk_coords(c, 2).len(), 13);
        assert!(circular_chunk_coords(c, -1).is_empty());
    }

    #[test]
    fn disc_stops_at_world_edge() {
        let corner = ChunkCoord::new(ChunkCoord::MIN_INDEX, ChunkCoord::MAX_INDEX);
        let disc = circular_chunk_coords(corner, 1);
        assert_eq!(disc.len(), 3);
        assert!(disc.iter().all(|c| c.in_world()));
    }

    #[test]
    fn sanitize_separates_radii() {
        let s = StreamConfig {
            load_radius: 5,
            evict_radius: 3,
            render_radius: 1,
            max_mesh_builds_per_update: 2,
        }
        .sanitized();
        assert_eq!((s.load_radius, s.evict_radius, s.render_radius), (5, 6, 5));
        assert_eq!(StreamConfig::default().sanitized(), StreamConfig::default());
    }
}
