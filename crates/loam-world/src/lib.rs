//! Chunk coordinates, world sizing, and the terrain column generator.
#![forbid(unsafe_code)]

mod chunk_coord;
pub mod generation;
mod terrain;
pub mod worldgen;

/// Horizontal edge length of a chunk, in blocks.
pub const CHUNK_SIZE: usize = 16;
/// Vertical extent of the world; chunks span the full height.
pub const CHUNK_HEIGHT: usize = 128;

pub use chunk_coord::{ChunkCoord, local_xz};
pub use generation::{ColumnProfile, TreeSpec};
pub use terrain::{Terrain, WorldGenMode};
pub use worldgen::{HeightModel, WorldGenConfig, WorldGenParams};
