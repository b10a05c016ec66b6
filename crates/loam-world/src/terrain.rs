use fastnoise_lite::{FastNoiseLite, NoiseType};
use loam_blocks::BlockType;

use crate::CHUNK_HEIGHT;
use crate::generation::{ColumnProfile, TreeSpec, pick_surface};
use crate::worldgen::{HeightModel, WorldGenParams};

const OCTAVES: i32 = 4;
// 1 + 0.5 + 0.25 + 0.125
const OCTAVE_NORM: f32 = 1.875;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorldGenMode {
    Normal,
    Flat { thickness: i32 },
}

impl WorldGenParams {
    pub fn mode(&self) -> WorldGenMode {
        if self.flat {
            WorldGenMode::Flat {
                thickness: self.flat_thickness,
            }
        } else {
            WorldGenMode::Normal
        }
    }
}

/// Deterministic column generator. Output depends only on seed, parameters and
/// the column coordinate, never on which chunks were generated before.
pub struct Terrain {
    pub seed: i32,
    params: WorldGenParams,
    noise: FastNoiseLite,
}

impl Terrain {
    pub fn new(seed: i32, params: WorldGenParams) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(params.height_frequency));
        Self {
            seed,
            params,
            noise,
        }
    }

    pub fn flat(seed: i32, thickness: i32) -> Self {
        Self::new(
            seed,
            WorldGenParams {
                flat: true,
                flat_thickness: thickness,
                ..WorldGenParams::default()
            },
        )
    }

    #[inline]
    pub fn params(&self) -> &WorldGenParams {
        &self.params
    }

    #[inline]
    pub fn mode(&self) -> WorldGenMode {
        self.params.mode()
    }

    /// Unclamped height-model output for a column.
    fn raw_height(&self, wx: i32, wz: i32) -> f32 {
        let p = &self.params;
        match p.height_model {
            HeightModel::Waves => {
                let x = wx as f64;
                let z = wz as f64;
                let n = (x * 0.08).sin() * 2.2
                    + (z * 0.08).cos() * 2.2
                    + (x * 0.017).sin() * (z * 0.017).cos() * 6.0;
                (p.height_base as f64 + n) as f32
            }
            HeightModel::Octaves => {
                let mut sum = 0.0f32;
                let mut amp = 1.0f32;
                let mut scale = 1.0f32;
                for _ in 0..OCTAVES {
                    sum += self.noise.get_noise_2d(wx as f32 * scale, wz as f32 * scale) * amp;
                    amp *= 0.5;
                    scale *= 2.0;
                }
                p.height_base + (sum / OCTAVE_NORM) * p.height_amplitude
            }
        }
    }

    /// Filled cell count of a column, clamped so there is always air above and
    /// a floor below.
    pub fn surface_height(&self, wx: i32, wz: i32) -> i32 {
        let max = CHUNK_HEIGHT as i32 - 2;
        let min = self.params.min_surface.min(max);
        (self.raw_height(wx, wz).round() as i32).max(min).min(max)
    }

    pub fn column(&self, wx: i32, wz: i32) -> ColumnProfile {
        match self.mode() {
            WorldGenMode::Flat { thickness } => ColumnProfile {
                surface: thickness.clamp(1, CHUNK_HEIGHT as i32 - 2),
                top: BlockType::Stone,
                subsurface: BlockType::Stone,
                topsoil_depth: 0,
            },
            WorldGenMode::Normal => {
                let surface = self.surface_height(wx, wz);
                let (top, subsurface) = pick_surface(&self.params, surface - 1);
                ColumnProfile {
                    surface,
                    top,
                    subsurface,
                    topsoil_depth: self.params.topsoil_depth,
                }
            }
        }
    }

    /// Terrain block at a world cell, ignoring decorations.
    pub fn block_at(&self, wx: i32, wy: i32, wz: i32) -> BlockType {
        self.column(wx, wz).block_at(wy)
    }

    /// Tree rooted at `(wx, wz)`, if any. Flat worlds grow none.
    pub fn tree_at(&self, wx: i32, wz: i32, column: &ColumnProfile) -> Option<TreeSpec> {
        if self.params.flat {
            return None;
        }
        TreeSpec::for_column(&self.params, self.seed as u32, wx, wz, column)
    }
}
