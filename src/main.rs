//! Headless driver: builds a world and walks a scripted observer through it.
#![forbid(unsafe_code)]

mod collision;
mod config;
mod player;
mod raycast;
mod session;

use clap::Parser;
use loam_blocks::BlockType;
use loam_geom::Vec3;
use loam_runtime::World;
use loam_world::Terrain;
use loam_world::worldgen::{WorldGenParams, load_params_from_path};
use std::error::Error;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::player::{Actor, MoveInput};
use crate::session::{FrameInput, Session};

#[derive(Parser, Debug)]
#[command(name = "loam", about = "Headless voxel world simulation")]
struct Args {
    /// Driver configuration (TOML).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Worldgen parameters (TOML); overrides the config's `worldgen`.
    #[arg(long)]
    worldgen: Option<PathBuf>,
    #[arg(long)]
    seed: Option<i32>,
    #[arg(long, default_value_t = 600)]
    frames: u32,
    /// Flat world with this many solid layers.
    #[arg(long)]
    flat: Option<i32>,
    /// Fixed timestep, seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// Block to place, by name; overrides the config's `edit.place_block`.
    #[arg(long)]
    place: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run(Args::parse()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let cfg = match &args.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::default(),
    };
    let dt = frame_dt(args.dt)?;
    let place_block = match args.place.as_deref() {
        Some(name) => BlockType::from_name(name).ok_or_else(|| format!("unknown block '{}'", name))?,
        None => cfg.edit.place_block,
    };
    let seed = args.seed.unwrap_or(cfg.seed);
    let mut params = match args.worldgen.as_ref().or(cfg.worldgen.as_ref()) {
        Some(path) => {
            log::info!("worldgen from {}", path.display());
            load_params_from_path(path)?
        }
        None => WorldGenParams::default(),
    };
    if let Some(thickness) = args.flat {
        params.flat = true;
        params.flat_thickness = thickness;
    }
    log::info!("seed={} mode={:?} model={:?}", seed, params.mode(), params.height_model);

    let terrain = Terrain::new(seed, params);
    let ground = terrain.column(0, 0).top_y();
    let world = World::new(terrain, cfg.stream.to_stream_config());
    let stream = world.stream_config();
    log::info!(
        "stream load={} evict={} render={} budget={}",
        stream.load_radius,
        stream.evict_radius,
        stream.render_radius,
        stream.max_mesh_builds_per_update
    );
    let actor = Actor::new(
        Vec3::new(0.5, ground as f32 + 3.0, 0.5),
        cfg.player.to_params(),
    );
    let mut session = Session::new(world, actor, cfg.edit.reach, place_block);
    session.settle_spawn();

    for frame in 0..args.frames {
        let input = scripted_input(frame);
        let report = session.tick(&input, dt);
        if let Some(outcome) = report.edit {
            log::info!(
                target: "events",
                "[tick {}] {:?} face={:?}",
                session.tick_count(),
                outcome,
                report.target.face()
            );
        }
        if frame % 120 == 0 {
            let p = session.actor.pos;
            log::info!(
                "[tick {}] pos=({:.2}, {:.2}, {:.2}) state={:?} target={} chunks={} dirty={} visible={}",
                session.tick_count(),
                p.x,
                p.y,
                p.z,
                session.actor.state,
                report.target.is_hit(),
                session.world.chunk_count(),
                session.world.dirty_count(),
                session.visible_geometry().count()
            );
        }
    }

    let s = session.world.stats();
    log::info!(
        "done ticks={} generated={} evicted={} trees={} meshes_built={} empty={} released={} recenters={} edits={}/{}",
        session.tick_count(),
        s.chunks_generated,
        s.chunks_evicted,
        s.trees_planted,
        s.meshes_built,
        s.meshes_empty,
        s.meshes_released,
        s.recenters,
        s.edits_applied,
        s.edits_applied + s.edits_rejected
    );
    session.world.clear();
    Ok(())
}

/// Validated fixed timestep.
fn frame_dt(dt: f32) -> Result<f32, Box<dyn Error>> {
    if dt.is_finite() && dt > 0.0 {
        Ok(dt)
    } else {
        Err(format!("--dt must be a positive, finite number of seconds (got {})", dt).into())
    }
}

/// Walks forward while slowly turning, hopping, sprinting in bursts, and
/// periodically digging and building.
fn scripted_input(frame: u32) -> FrameInput {
    let phase = frame % 150;
    FrameInput {
        movement: MoveInput {
            forward: 1.0,
            strafe: 0.0,
            jump: frame % 90 == 45,
            sneak: false,
            sprint: (200..400).contains(&frame),
        },
        look: (0.3, 0.0),
        toggle_fly: false,
        break_block: phase == 75,
        place_block: phase == 0 && frame > 0,
        select: None,
    }
}
