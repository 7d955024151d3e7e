use std::io;
use thiserror::Error;

/// Errors that can occur while loading or validating a [`GameConfig`](crate::config::GameConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    /// Config file is not valid JSON for `GameConfig`
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config parsed but describes an unplayable game
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level error for startup and the frame loop
///
/// SDL2 reports every failure as a plain `String`, so those are wrapped
/// as-is in [`GameError::Sdl`].
#[derive(Debug, Error)]
pub enum GameError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<String> for GameError {
    fn from(message: String) -> Self {
        GameError::Sdl(message)
    }
}
