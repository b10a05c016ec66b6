use loam_blocks::BlockType;
use loam_runtime::StreamConfig;
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::player::ActorParams;

/// Driver configuration (`loam.toml`). Every field is optional.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_seed")]
    pub seed: i32,
    /// Worldgen TOML, resolved relative to the working directory.
    #[serde(default)]
    pub worldgen: Option<PathBuf>,
    #[serde(default)]
    pub stream: Stream,
    #[serde(default)]
    pub player: Player,
    #[serde(default)]
    pub edit: Edit,
}

fn default_seed() -> i32 {
    1337
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            worldgen: None,
            stream: Stream::default(),
            player: Player::default(),
            edit: Edit::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Stream {
    #[serde(default = "default_load_radius")]
    pub load_radius: i32,
    #[serde(default = "default_evict_radius")]
    pub evict_radius: i32,
    #[serde(default = "default_render_radius")]
    pub render_radius: i32,
    #[serde(default)]
    pub max_mesh_builds_per_update: usize,
}
fn default_load_radius() -> i32 {
    4
}
fn default_evict_radius() -> i32 {
    6
}
fn default_render_radius() -> i32 {
    5
}
impl Default for Stream {
    fn default() -> Self {
        Self {
            load_radius: default_load_radius(),
            evict_radius: default_evict_radius(),
            render_radius: default_render_radius(),
            max_mesh_builds_per_update: 0,
        }
    }
}

impl Stream {
    pub fn to_stream_config(&self) -> StreamConfig {
        StreamConfig {
            load_radius: self.load_radius,
            evict_radius: self.evict_radius,
            render_radius: self.render_radius,
            max_mesh_builds_per_update: self.max_mesh_builds_per_update,
        }
    }
}

/// Physics constants; missing keys keep the stock values.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Player {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub eye_height: Option<f32>,
    pub gravity: Option<f32>,
    pub jump_speed: Option<f32>,
    pub terminal_velocity: Option<f32>,
    pub walk_speed: Option<f32>,
    pub sprint_mult: Option<f32>,
    pub fly_speed: Option<f32>,
}

impl Player {
    pub fn to_params(&self) -> ActorParams {
        let d = ActorParams::default();
        ActorParams {
            width: self.width.unwrap_or(d.width),
            height: self.height.unwrap_or(d.height),
            eye_height: self.eye_height.unwrap_or(d.eye_height),
            gravity: self.gravity.unwrap_or(d.gravity),
            jump_speed: self.jump_speed.unwrap_or(d.jump_speed),
            terminal_velocity: self.terminal_velocity.unwrap_or(d.terminal_velocity),
            walk_speed: self.walk_speed.unwrap_or(d.walk_speed),
            sprint_mult: self.sprint_mult.unwrap_or(d.sprint_mult),
            fly_speed: self.fly_speed.unwrap_or(d.fly_speed),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Edit {
    #[serde(default = "default_reach")]
    pub reach: f32,
    #[serde(default = "default_place_block")]
    pub place_block: BlockType,
}
fn default_reach() -> f32 {
    6.0
}
fn default_place_block() -> BlockType {
    BlockType::Cobblestone
}
impl Default for Edit {
    fn default() -> Self {
        Self {
            reach: default_reach(),
            place_block: default_place_block(),
        }
    }
}

impl AppConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        let cfg: AppConfig = toml::from_str(&s)?;
        Ok(cfg)
    }
}
