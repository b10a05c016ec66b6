use loam_blocks::BlockType;
use loam_edit::{EditCommand, EditOutcome};
use loam_geom::Vec3;
use loam_runtime::{UpdateReport, World};
use loam_world::CHUNK_HEIGHT;

use crate::collision::overlaps_solid;
use crate::player::{Actor, MoveInput, StepEvents};
use crate::raycast::{RayCastResult, raycast};

/// Input snapshot for one frame, gathered by whatever drives the session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub movement: MoveInput,
    /// Degrees of yaw and pitch to add this frame.
    pub look: (f32, f32),
    pub toggle_fly: bool,
    pub break_block: bool,
    pub place_block: bool,
    pub select: Option<BlockType>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub stream: UpdateReport,
    pub step: StepEvents,
    pub target: RayCastResult,
    pub edit: Option<EditOutcome>,
}

/// One observer walking around one world.
pub struct Session {
    pub world: World,
    pub actor: Actor,
    pub reach: f32,
    pub place_block: BlockType,
    pub target: RayCastResult,
    tick: u64,
}

impl Session {
    pub fn new(world: World, actor: Actor, reach: f32, place_block: BlockType) -> Self {
        Self {
            world,
            actor,
            reach,
            place_block,
            target: RayCastResult::Miss,
            tick: 0,
        }
    }

    /// Loads the spawn area and lifts the actor out of any block it starts in.
    pub fn settle_spawn(&mut self) {
        self.world.update(self.actor.pos);
        let world = &self.world;
        let (hw, h) = (self.actor.half_width(), self.actor.params.height);
        while self.actor.pos.y < CHUNK_HEIGHT as f32
            && overlaps_solid(self.actor.pos, hw, h, |x, y, z| world.is_solid_block(x, y, z))
        {
            self.actor.pos.y = self.actor.pos.y.floor() + 1.0;
        }
    }

    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Streams, moves, retargets, then edits. Meshes touched by an edit are
    /// rebuilt on the next tick's streaming pass.
    pub fn tick(&mut self, input: &FrameInput, dt: f32) -> FrameReport {
        self.tick += 1;
        let tick = self.tick;
        let stream = self.world.update(self.actor.pos);

        if input.toggle_fly {
            self.actor.toggle_fly();
            log::info!(target: "events", "[tick {}] FlyToggled on={}", tick, self.actor.flying);
        }
        let (dyaw, dpitch) = input.look;
        if dyaw != 0.0 || dpitch != 0.0 {
            self.actor.look(dyaw, dpitch);
        }
        if let Some(b) = input.select {
            self.place_block = b;
        }

        let world = &self.world;
        let step = self
            .actor
            .step(&input.movement, dt, |x, y, z| world.is_solid_block(x, y, z));
        if step.jumped {
            log::trace!(target: "events", "[tick {}] Jumped", tick);
        }
        if step.landed {
            log::trace!(target: "events", "[tick {}] Landed y={:.3}", tick, self.actor.pos.y);
        }

        self.target = self.retarget();

        let edit = if input.break_block {
            self.target
                .block()
                .map(|(x, y, z)| self.world.apply_edit(EditCommand::Break { x, y, z }, None))
        } else if input.place_block {
            let actor_box = self.actor.bounding_box();
            let block = self.place_block;
            self.target.adjacent().map(|(x, y, z)| {
                self.world
                    .apply_edit(EditCommand::Place { x, y, z, block }, Some(&actor_box))
            })
        } else {
            None
        };
        if edit.is_some_and(|e| e.is_applied()) {
            self.target = self.retarget();
        }

        FrameReport {
            stream,
            step,
            target: self.target,
            edit,
        }
    }

    fn retarget(&self) -> RayCastResult {
        let world = &self.world;
        raycast(
            self.actor.eye_position(),
            self.actor.view_direction(),
            self.reach,
            |x, y, z| world.is_solid_block(x, y, z),
        )
    }

    /// Chunk origins and vertex buffers the renderer would draw this frame.
    pub fn visible_geometry(&self) -> impl Iterator<Item = (Vec3, &[f32])> + '_ {
        self.world
            .visible_meshes(self.actor.pos)
            .map(|(origin, mesh)| (origin, mesh.vertices()))
    }
}
