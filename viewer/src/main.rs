mod logging;
mod projection;
mod state;
use state::State;

use clap::Parser;
use ggez::{
    conf::{WindowMode, WindowSetup},
    event, ContextBuilder,
};
use std::error::Error;
use std::path::PathBuf;
use tracing::info;

/// Fire a projectile at a planet and see what's left.
#[derive(Parser, Debug)]
#[command(name = "impact_simulator", version, about)]
struct Args {
    /// A json5 scene file. Without one, the `--prefab` scene is used.
    scene: Option<PathBuf>,

    /// Built-in scene to use when no file is given.
    #[arg(long, default_value = loader::DEFAULT_SCENE)]
    prefab: String,

    /// Log filter, e.g. `debug` or `simulator=trace`. `RUST_LOG` takes precedence.
    #[arg(long)]
    log_level: Option<String>,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::init_logging(args.log_level.as_deref());

    let scene = match &args.scene {
        Some(path) => loader::load_file(path)?,
        None => loader::get_scene_from_id(&args.prefab)?.construct()?,
    };
    info!(
        planet = %scene.scenery.planet.name,
        speed = scene.config.projectile_speed(),
        size = scene.config.projectile_size(),
        "scene ready"
    );
    let (simulation, stars) = scene.into_simulation();

    let (mut ctx, event_loop) = ContextBuilder::new("impact_simulator", "gamma-delta")
        .window_setup(WindowSetup::default().title("Impact simulator!"))
        .window_mode(WindowMode::default().resizable(true))
        .build()?;

    let state = State::new(&mut ctx, simulation, stars);
    event::run(ctx, event_loop, state)
}
