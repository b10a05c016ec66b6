//! Block edit requests, their validation, and dirty-neighbour computation.
#![forbid(unsafe_code)]

use loam_blocks::BlockType;
use loam_geom::Aabb;
use loam_world::{CHUNK_HEIGHT, CHUNK_SIZE, ChunkCoord, local_xz};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditCommand {
    Break { x: i32, y: i32, z: i32 },
    Place { x: i32, y: i32, z: i32, block: BlockType },
}

impl EditCommand {
    #[inline]
    pub fn target(&self) -> (i32, i32, i32) {
        match *self {
            EditCommand::Break { x, y, z } | EditCommand::Place { x, y, z, .. } => (x, y, z),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RejectReason {
    OutOfRange,
    /// The placed block would overlap the actor.
    OverlapsActor,
    Occupied,
    NothingToBreak,
    /// Placing air is a break, not a placement.
    NotPlaceable,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Applied {
        x: i32,
        y: i32,
        z: i32,
        previous: BlockType,
        block: BlockType,
    },
    Rejected(RejectReason),
}

impl EditOutcome {
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied { .. })
    }
}

/// Checks `cmd` against the block currently at its target and the actor's box.
/// Returns the block to write on success.
pub fn validate(
    cmd: &EditCommand,
    current: BlockType,
    actor: Option<&Aabb>,
) -> Result<BlockType, RejectReason> {
    let (x, y, z) = cmd.target();
    if !(0..CHUNK_HEIGHT as i32).contains(&y) {
        return Err(RejectReason::OutOfRange);
    }
    match *cmd {
        EditCommand::Break { .. } => {
            if current.is_air() {
                return Err(RejectReason::NothingToBreak);
            }
            Ok(BlockType::Air)
        }
        EditCommand::Place { block, .. } => {
            if block.is_air() {
                return Err(RejectReason::NotPlaceable);
            }
            if current.is_solid() {
                return Err(RejectReason::Occupied);
            }
            if actor.is_some_and(|a| block.is_solid() && a.intersects_block(x, y, z)) {
                return Err(RejectReason::OverlapsActor);
            }
            Ok(block)
        }
    }
}

/// Chunks whose meshes can change when block `(wx, wz)` changes: the owner first,
/// then each face neighbour sharing the block's boundary plane.
pub fn affected_chunks(wx: i32, wz: i32) -> Vec<ChunkCoord> {
    let owner = ChunkCoord::from_world(wx, wz);
    let (lx, lz) = local_xz(wx, wz);
    let last = CHUNK_SIZE - 1;
    let mut affected = Vec::with_capacity(3);
    affected.push(owner);
    if lx == 0 {
        affected.push(owner.offset(-1, 0));
    }
    if lx == last {
        affected.push(owner.offset(1, 0));
    }
    if lz == 0 {
        affected.push(owner.offset(0, -1));
    }
    if lz == last {
        affected.push(owner.offset(0, 1));
    }
    affected
}
