/// Monotonic counters over the lifetime of a [`crate::World`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorldStats {
    pub chunks_generated: u64,
    pub chunks_evicted: u64,
    pub trees_planted: u64,
    pub meshes_built: u64,
    /// Builds that produced no geometry; no mesh is stored for these.
    pub meshes_empty: u64,
    pub meshes_released: u64,
    pub stream_updates: u64,
    pub recenters: u64,
    pub edits_applied: u64,
    pub edits_rejected: u64,
}

/// What a single [`crate::World::update`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub recentered: bool,
    pub loaded: usize,
    pub evicted: usize,
    pub built: usize,
    /// Dirty chunks still waiting for a mesh after this call.
    pub dirty_left: usize,
}
