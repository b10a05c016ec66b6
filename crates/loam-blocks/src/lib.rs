//! Block kinds and their static attribute table.
#![forbid(unsafe_code)]

pub mod registry;
pub mod types;

// Re-exports for convenience
pub use registry::{BLOCK_DEFS, BlockDef};
pub use types::{BlockType, FACE_COUNT, Rgb};
