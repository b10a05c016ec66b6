use loam_geom::Vec3;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosY,
        Face::NegY,
        Face::PosX,
        Face::NegX,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Returns the `[0..6)` index of this face, matching block colour slots.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face` value.
    /// Falls back to `PosY` for out-of-range indices.
    #[inline]
    pub fn from_index(i: usize) -> Face {
        match i {
            0 => Face::PosY,
            1 => Face::NegY,
            2 => Face::PosX,
            3 => Face::NegX,
            4 => Face::PosZ,
            5 => Face::NegZ,
            _ => Face::PosY,
        }
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::new(dx as f32, dy as f32, dz as f32)
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }

    /// Directional brightness applied on top of the block colour.
    #[inline]
    pub fn shade(self) -> f32 {
        match self {
            Face::PosY => 1.0,
            Face::NegY => 0.5,
            Face::PosZ | Face::NegZ => 0.85,
            Face::PosX | Face::NegX => 0.75,
        }
    }

    /// Quad corners of the unit cell at `(x, y, z)`, counter-clockwise seen from outside.
    pub fn corners(self, x: f32, y: f32, z: f32) -> [[f32; 3]; 4] {
        let (x1, y1, z1) = (x + 1.0, y + 1.0, z + 1.0);
        match self {
            Face::PosY => [[x, y1, z], [x, y1, z1], [x1, y1, z1], [x1, y1, z]],
            Face::NegY => [[x, y, z], [x1, y, z], [x1, y, z1], [x, y, z1]],
            Face::PosX => [[x1, y, z], [x1, y1, z], [x1, y1, z1], [x1, y, z1]],
            Face::NegX => [[x, y, z1], [x, y1, z1], [x, y1, z], [x, y, z]],
            Face::PosZ => [[x, y, z1], [x1, y, z1], [x1, y1, z1], [x, y1, z1]],
            Face::NegZ => [[x, y, z], [x, y1, z], [x1, y1, z], [x1, y, z]],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(a: [f32; 3], b: [f32; 3]) -> Vec3 {
        Vec3::new(a[0] - b[0], a[1] - b[1], a[2] - b[2])
    }

    #[test]
    fn index_round_trips() {
        for f in Face::ALL {
            assert_eq!(Face::from_index(f.index()), f);
        }
        assert_eq!(Face::from_index(9), Face::PosY);
    }

    #[test]
    fn corners_wind_outward() {
        for f in Face::ALL {
            let c = f.corners(2.0, 3.0, 4.0);
            for tri in [[0, 1, 2], [0, 2, 3]] {
                let n = sub(c[tri[1]], c[tri[0]]).cross(sub(c[tri[2]], c[tri[0]]));
                assert!(n.dot(f.normal()) > 0.0, "{f:?} winds inward");
            }
        }
    }
}
