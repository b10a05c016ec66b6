use loam_geom::Vec3;
use loam_mesh_cpu::Face;

/// Sampling distance along the ray, in blocks.
pub const RAY_STEP: f32 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RayCastResult {
    Miss,
    /// `adjacent` is the last distinct empty cell visited before `block`.
    Hit {
        block: (i32, i32, i32),
        adjacent: (i32, i32, i32),
    },
}

impl RayCastResult {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, RayCastResult::Hit { .. })
    }

    #[inline]
    pub fn block(&self) -> Option<(i32, i32, i32)> {
        match *self {
            RayCastResult::Hit { block, .. } => Some(block),
            RayCastResult::Miss => None,
        }
    }

    /// Placement target for a hit.
    #[inline]
    pub fn adjacent(&self) -> Option<(i32, i32, i32)> {
        match *self {
            RayCastResult::Hit { adjacent, .. } => Some(adjacent),
            RayCastResult::Miss => None,
        }
    }

    /// Face of `block` the ray entered through, when the two cells share one.
    pub fn face(&self) -> Option<Face> {
        let RayCastResult::Hit { block, adjacent } = *self else {
            return None;
        };
        let d = (
            adjacent.0 - block.0,
            adjacent.1 - block.1,
            adjacent.2 - block.2,
        );
        Face::ALL.into_iter().find(|f| f.delta() == d)
    }
}

/// Marches from `origin` along `dir` in fixed steps and reports the first solid
/// cell. The origin's own cell is never tested. A ray that clips a block corner
/// for less than one step can pass through it.
pub fn raycast<F>(origin: Vec3, dir: Vec3, max_distance: f32, mut is_solid: F) -> RayCastResult
where
    F: FnMut(i32, i32, i32) -> bool,
{
    if !dir.is_finite() || !origin.is_finite() || dir.length_squared() == 0.0 {
        return RayCastResult::Miss;
    }
    let step = dir.normalized() * RAY_STEP;
    let steps = ((max_distance / RAY_STEP) as i32).max(1);
    let mut pos = origin;
    let mut prev = origin.floor_cell();
    for _ in 0..steps {
        pos += step;
        let cell = pos.floor_cell();
        if cell == prev {
            continue;
        }
        if is_solid(cell.0, cell.1, cell.2) {
            return RayCastResult::Hit {
                block: cell,
                adjacent: prev,
            };
        }
        prev = cell;
    }
    RayCastResult::Miss
}
