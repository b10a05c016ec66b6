use loam_geom::{Aabb, Vec3};

use crate::collision::resolve;

/// Longest per-substep move; keeps fast falls from skipping a block.
const MAX_SUBSTEP: f32 = 0.45;
const MAX_SUBSTEPS: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorParams {
    pub width: f32,
    pub height: f32,
    pub eye_height: f32,
    /// Downward acceleration, positive.
    pub gravity: f32,
    pub jump_speed: f32,
    /// Most negative vertical velocity.
    pub terminal_velocity: f32,
    pub walk_speed: f32,
    pub sprint_mult: f32,
    pub fly_speed: f32,
}

impl Default for ActorParams {
    fn default() -> Self {
        Self {
            width: 0.6,
            height: 1.75,
            eye_height: 1.55,
            gravity: 32.0,
            jump_speed: 9.0,
            terminal_velocity: -60.0,
            walk_speed: 6.0,
            sprint_mult: 1.6,
            fly_speed: 10.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locomotion {
    Grounded,
    Airborne,
}

/// Per-frame movement intent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveInput {
    /// +1 forward, -1 back.
    pub forward: f32,
    /// +1 right, -1 left.
    pub strafe: f32,
    pub jump: bool,
    pub sneak: bool,
    pub sprint: bool,
}

/// What changed during one [`Actor::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepEvents {
    pub jumped: bool,
    pub landed: bool,
}

#[derive(Debug)]
pub struct Actor {
    /// Feet position: x/z at the centre, y at the soles.
    pub pos: Vec3,
    pub vel: Vec3,
    /// Degrees; 0 looks down +X, 90 down +Z.
    pub yaw: f32,
    /// Degrees, clamped to ±89.
    pub pitch: f32,
    pub flying: bool,
    pub state: Locomotion,
    pub params: ActorParams,
}

impl Actor {
    pub fn new(spawn: Vec3, params: ActorParams) -> Self {
        Self {
            pos: spawn,
            vel: Vec3::ZERO,
            yaw: -90.0,
            pitch: -30.0,
            flying: false,
            state: Locomotion::Airborne,
            params,
        }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.params.width * 0.5
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.state == Locomotion::Grounded
    }

    pub fn eye_position(&self) -> Vec3 {
        Vec3::new(self.pos.x, self.pos.y + self.params.eye_height, self.pos.z)
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_feet(self.pos, self.half_width(), self.params.height)
    }

    /// Unit look vector from yaw and pitch.
    pub fn view_direction(&self) -> Vec3 {
        let (ys, yc) = self.yaw.to_radians().sin_cos();
        let (ps, pc) = self.pitch.to_radians().sin_cos();
        Vec3::new(yc * pc, ps, ys * pc).normalized()
    }

    pub fn look(&mut self, dyaw: f32, dpitch: f32) {
        self.yaw = (self.yaw + dyaw).rem_euclid(360.0);
        self.pitch = (self.pitch + dpitch).clamp(-89.0, 89.0);
    }

    pub fn toggle_fly(&mut self) {
        self.flying = !self.flying;
        self.vel.y = 0.0;
        if self.flying {
            self.state = Locomotion::Airborne;
        }
    }

    /// Horizontal wish velocity from yaw and input, sprint applied.
    fn wish_velocity(&self, input: &MoveInput) -> Vec3 {
        let (ys, yc) = self.yaw.to_radians().sin_cos();
        let forward = Vec3::new(yc, 0.0, ys);
        let right = forward.cross(Vec3::UP);
        let mut wish = forward * input.forward + right * input.strafe;
        if wish.length_squared() > 1.0 {
            wish = wish.normalized();
        }
        let speed = if self.flying {
            self.params.fly_speed
        } else if input.sprint && !input.sneak {
            self.params.walk_speed * self.params.sprint_mult
        } else {
            self.params.walk_speed
        };
        wish * speed
    }

    /// Integrates one frame: input, gravity, then collision against `is_solid`.
    pub fn step<F>(&mut self, input: &MoveInput, dt: f32, mut is_solid: F) -> StepEvents
    where
        F: FnMut(i32, i32, i32) -> bool,
    {
        let mut events = StepEvents::default();
        if !dt.is_finite() || dt <= 0.0 {
            return events;
        }
        let wish = self.wish_velocity(input);
        self.vel.x = wish.x;
        self.vel.z = wish.z;
        if self.flying {
            let up = (input.jump as i32 - input.sneak as i32) as f32;
            self.vel.y = up * self.params.fly_speed;
        } else {
            if input.jump && self.is_grounded() {
                self.vel.y = self.params.jump_speed;
                self.state = Locomotion::Airborne;
                events.jumped = true;
            }
            self.vel.y = (self.vel.y - self.params.gravity * dt).max(self.params.terminal_velocity);
        }

        let delta = self.vel * dt;
        let longest = delta.x.abs().max(delta.y.abs()).max(delta.z.abs());
        let substeps = ((longest / MAX_SUBSTEP).ceil() as usize).clamp(1, MAX_SUBSTEPS);
        let part = delta / substeps as f32;
        let mut grounded = false;
        for _ in 0..substeps {
            let mut d = part;
            // Blocked axes stay blocked for the rest of the frame.
            for axis in 0..3 {
                if self.vel.axis(axis) == 0.0 {
                    d.set_axis(axis, 0.0);
                }
            }
            let r = resolve(
                self.pos,
                self.vel,
                d,
                self.half_width(),
                self.params.height,
                &mut is_solid,
            );
            self.pos = r.position;
            self.vel = r.velocity;
            grounded |= r.grounded;
        }

        let next = if grounded && !self.flying {
            Locomotion::Grounded
        } else {
            Locomotion::Airborne
        };
        if next == Locomotion::Grounded && self.state == Locomotion::Airborne {
            events.landed = true;
        }
        self.state = next;
        events
    }
}
