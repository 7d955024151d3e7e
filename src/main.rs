use log::{error, info};
use std::path::PathBuf;

mod collision;
mod config;
mod error;
mod game;
mod gui;
mod input_system;
mod obstacle;
mod pacing;
mod player;
mod render;
mod spawn;
mod text;

#[cfg(test)]
mod test_support;

use config::GameConfig;
use error::GameError;
use game::Game;
use input_system::SdlInput;
use pacing::FixedRatePacer;
use spawn::RngSpawner;

/// Environment variable naming a JSON config file, used when no path is given on the command line
const CONFIG_ENV_VAR: &str = "LANE_DODGER_CONFIG";

fn config_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR))
        .map(PathBuf::from)
}

fn load_config() -> Result<GameConfig, GameError> {
    match config_path() {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Ok(GameConfig::load_from_file(&path)?)
        }
        None => Ok(GameConfig::default()),
    }
}

fn run() -> Result<(), GameError> {
    let config = load_config()?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(&config.window_title, config.window_width, config.window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    info!(
        "Opened {}x{} window \"{}\"",
        config.window_width, config.window_height, config.window_title
    );

    let mut input = SdlInput::new(sdl_context.event_pump()?);
    let mut pacer = FixedRatePacer::new(config.target_fps);

    let spawner = match config.seed {
        Some(seed) => {
            info!("Using fixed obstacle seed {}", seed);
            RngSpawner::from_seed(seed)
        }
        None => RngSpawner::from_entropy(),
    };

    info!("Controls: Left/Right (or A/D) steer, R restarts after a crash, Esc quits");

    let mut game = Game::new(&config, spawner);
    let frames = game.run(&mut input, &mut canvas, &mut pacer)?;
    info!(
        "Played {} frames, final score {}",
        frames,
        game.state().score
    );

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
