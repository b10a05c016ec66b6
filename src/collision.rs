use loam_geom::{Aabb, Vec3};

/// Outcome of moving a box through the block grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolved {
    /// Feet position after all three axes.
    pub position: Vec3,
    /// Input velocity with every blocked axis zeroed.
    pub velocity: Vec3,
    /// A downward Y move was stopped by a block.
    pub grounded: bool,
    pub blocked: [bool; 3],
}

/// Moves an upright box standing on `feet` by `delta`, one axis at a time in
/// X, Y, Z order, clamping each axis against the nearest solid block face.
pub fn resolve<F>(
    feet: Vec3,
    velocity: Vec3,
    delta: Vec3,
    half_width: f32,
    height: f32,
    mut is_solid: F,
) -> Resolved
where
    F: FnMut(i32, i32, i32) -> bool,
{
    let mut pos = feet;
    let mut vel = velocity;
    let mut blocked = [false; 3];
    for axis in 0..3 {
        let d = delta.axis(axis);
        if d == 0.0 || !d.is_finite() {
            continue;
        }
        pos.set_axis(axis, pos.axis(axis) + d);
        if let Some(plane) = nearest_face(pos, axis, d, half_width, height, &mut is_solid) {
            // Feet sit `below` under the box's low face and `above` under its high face.
            let (below, above) = if axis == 1 {
                (0.0, height)
            } else {
                (half_width, half_width)
            };
            pos.set_axis(axis, flush(plane, if d > 0.0 { above } else { below }, d > 0.0));
            vel.set_axis(axis, 0.0);
            blocked[axis] = true;
        }
    }
    Resolved {
        position: pos,
        velocity: vel,
        grounded: blocked[1] && delta.y < 0.0,
        blocked,
    }
}

/// Face plane of the closest solid block overlapping the moved box on `axis`.
fn nearest_face<F>(
    feet: Vec3,
    axis: usize,
    d: f32,
    half_width: f32,
    height: f32,
    is_solid: &mut F,
) -> Option<f32>
where
    F: FnMut(i32, i32, i32) -> bool,
{
    let bx = Aabb::from_feet(feet, half_width, height);
    let mut lo = [bx.min.x, bx.min.y, bx.min.z];
    let mut hi = [bx.max.x, bx.max.y, bx.max.z];
    if d > 0.0 {
        hi[axis] += 0.5;
    } else {
        lo[axis] -= 0.5;
    }
    let lo = lo.map(|v| v.floor() as i32);
    let hi = hi.map(|v| v.ceil() as i32);
    let mut plane: Option<f32> = None;
    for y in lo[1]..hi[1] {
        for z in lo[2]..hi[2] {
            for x in lo[0]..hi[0] {
                if !is_solid(x, y, z) {
                    continue;
                }
                let cell = Aabb::block(x, y, z);
                if !bx.intersects(&cell) {
                    continue;
                }
                let face = if d > 0.0 {
                    cell.min.axis(axis)
                } else {
                    cell.max.axis(axis)
                };
                plane = Some(match plane {
                    Some(p) if d > 0.0 => p.min(face),
                    Some(p) => p.max(face),
                    None => face,
                });
            }
        }
    }
    plane
}

/// Feet coordinate placing the box face `offset` away exactly on `plane`,
/// never past it after rounding.
fn flush(plane: f32, offset: f32, positive: bool) -> f32 {
    if positive {
        let mut p = plane - offset;
        while p + offset > plane {
            p -= p.abs().max(1.0) * f32::EPSILON;
        }
        p
    } else {
        let mut p = plane + offset;
        while p - offset < plane {
            p += p.abs().max(1.0) * f32::EPSILON;
        }
        p
    }
}

/// Whether a box standing on `feet` overlaps any solid block.
pub fn overlaps_solid<F>(feet: Vec3, half_width: f32, height: f32, mut is_solid: F) -> bool
where
    F: FnMut(i32, i32, i32) -> bool,
{
    let bx = Aabb::from_feet(feet, half_width, height);
    let (x0, y0, z0) = bx.min.floor_cell();
    let (x1, y1, z1) = (
        bx.max.x.ceil() as i32,
        bx.max.y.ceil() as i32,
        bx.max.z.ceil() as i32,
    );
    for y in y0..y1 {
        for z in z0..z1 {
            for x in x0..x1 {
                if is_solid(x, y, z) && bx.intersects_block(x, y, z) {
                    return true;
                }
            }
        }
    }
    false
}
