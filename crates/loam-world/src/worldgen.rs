use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::CHUNK_HEIGHT;

/// TOML shape of a worldgen file. Every table and field is optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct WorldGenConfig {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub flat: Flat,
    #[serde(default)]
    pub height: Height,
    #[serde(default)]
    pub surface: Surface,
    #[serde(default)]
    pub trees: Trees,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Normal,
    Flat,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Flat {
    #[serde(default = "default_flat_thickness")]
    pub thickness: i32,
}
fn default_flat_thickness() -> i32 {
    32
}
impl Default for Flat {
    fn default() -> Self {
        Self {
            thickness: default_flat_thickness(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HeightModel {
    /// Closed-form sine/cosine swell around `base`.
    #[default]
    Waves,
    /// Seeded OpenSimplex2 fractal, four octaves.
    Octaves,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Height {
    #[serde(default)]
    pub model: HeightModel,
    #[serde(default = "default_height_base")]
    pub base: f32,
    #[serde(default = "default_height_amplitude")]
    pub amplitude: f32,
    #[serde(default = "default_height_frequency")]
    pub frequency: f32,
    #[serde(default = "default_min_surface")]
    pub min_surface: i32,
}
fn default_height_base() -> f32 {
    40.0
}
fn default_height_amplitude() -> f32 {
    24.0
}
fn default_height_frequency() -> f32 {
    0.01
}
fn default_min_surface() -> i32 {
    4
}
impl Default for Height {
    fn default() -> Self {
        Self {
            model: HeightModel::Waves,
            base: default_height_base(),
            amplitude: default_height_amplitude(),
            frequency: default_height_frequency(),
            min_surface: default_min_surface(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Surface {
    #[serde(default = "default_beach_below")]
    pub beach_below: i32,
    #[serde(default = "default_mountain_above")]
    pub mountain_above: i32,
    #[serde(default = "default_topsoil_depth")]
    pub topsoil_depth: i32,
}
fn default_beach_below() -> i32 {
    33
}
fn default_mountain_above() -> i32 {
    48
}
fn default_topsoil_depth() -> i32 {
    3
}
impl Default for Surface {
    fn default() -> Self {
        Self {
            beach_below: default_beach_below(),
            mountain_above: default_mountain_above(),
            topsoil_depth: default_topsoil_depth(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Trees {
    #[serde(default = "default_tree_probability")]
    pub probability: f32,
    #[serde(default = "default_trunk_min")]
    pub trunk_min: i32,
    #[serde(default = "default_trunk_max")]
    pub trunk_max: i32,
}
fn default_tree_probability() -> f32 {
    0.01
}
fn default_trunk_min() -> i32 {
    4
}
fn default_trunk_max() -> i32 {
    5
}
impl Default for Trees {
    fn default() -> Self {
        Self {
            probability: default_tree_probability(),
            trunk_min: default_trunk_min(),
            trunk_max: default_trunk_max(),
        }
    }
}

/// Flattened, validated parameters consumed by [`crate::Terrain`].
#[derive(Clone, Debug, PartialEq)]
pub struct WorldGenParams {
    pub flat: bool,
    pub flat_thickness: i32,
    pub height_model: HeightModel,
    pub height_base: f32,
    pub height_amplitude: f32,
    pub height_frequency: f32,
    pub min_surface: i32,
    pub beach_below: i32,
    pub mountain_above: i32,
    pub topsoil_depth: i32,
    pub tree_probability: f32,
    pub trunk_min: i32,
    pub trunk_max: i32,
}

impl Default for WorldGenParams {
    fn default() -> Self {
        Self::from_config(&WorldGenConfig::default())
    }
}

impl WorldGenParams {
    pub fn from_config(cfg: &WorldGenConfig) -> Self {
        let height = CHUNK_HEIGHT as i32;
        let trunk_min = cfg.trees.trunk_min.clamp(1, height);
        let probability = cfg.trees.probability;
        Self {
            flat: cfg.mode == Mode::Flat,
            flat_thickness: cfg.flat.thickness.max(0),
            height_model: cfg.height.model,
            height_base: cfg.height.base,
            height_amplitude: cfg.height.amplitude,
            height_frequency: cfg.height.frequency,
            min_surface: cfg.height.min_surface.max(1),
            beach_below: cfg.surface.beach_below,
            mountain_above: cfg.surface.mountain_above,
            topsoil_depth: cfg.surface.topsoil_depth.max(0),
            tree_probability: if probability.is_nan() {
                0.0
            } else {
                probability.clamp(0.0, 1.0)
            },
            trunk_min,
            trunk_max: cfg.trees.trunk_max.clamp(trunk_min, height),
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<WorldGenConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: WorldGenConfig = toml::from_str(&s)?;
    Ok(cfg)
}

pub fn load_params_from_path(path: &Path) -> Result<WorldGenParams, Box<dyn Error>> {
    let cfg = load_config_from_path(path)?;
    Ok(WorldGenParams::from_config(&cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg: WorldGenConfig = toml::from_str("").unwrap();
        let p = WorldGenParams::from_config(&cfg);
        assert_eq!(p, WorldGenParams::default());
        assert!(!p.flat);
        assert_eq!(p.height_model, HeightModel::Waves);
        assert_eq!(p.height_base, 40.0);
        assert_eq!(p.min_surface, 4);
        assert_eq!((p.trunk_min, p.trunk_max), (4, 5));
    }

    #[test]
    fn partial_tables_fill_remaining_fields() {
        let src = r#"
            mode = "flat"
            [flat]
            thickness = 11
            [height]
            model = "octaves"
            [trees]
            trunk_min = 6
            trunk_max = 2
        "#;
        let cfg: WorldGenConfig = toml::from_str(src).unwrap();
        let p = WorldGenParams::from_config(&cfg);
        assert!(p.flat);
        assert_eq!(p.flat_thickness, 11);
        assert_eq!(p.height_model, HeightModel::Octaves);
        assert_eq!(p.height_frequency, 0.01);
        assert_eq!((p.trunk_min, p.trunk_max), (6, 6));
    }

    #[test]
    fn degenerate_tree_settings_are_tamed() {
        let src = r#"
            [trees]
            probability = nan
            trunk_max = 2147483647
        "#;
        let cfg: WorldGenConfig = toml::from_str(src).unwrap();
        let p = WorldGenParams::from_config(&cfg);
        assert_eq!(p.tree_probability, 0.0);
        assert_eq!(p.trunk_max, CHUNK_HEIGHT as i32);

        let cfg: WorldGenConfig = toml::from_str("[trees]\nprobability = 7.5").unwrap();
        assert_eq!(WorldGenParams::from_config(&cfg).tree_probability, 1.0);
    }
}
