//! Game configuration
//!
//! Every tunable number of the game lives in [`GameConfig`]. The defaults
//! reproduce the classic layout: an 800x600 window, a 50x80 car near the
//! bottom edge and a 50x80 obstacle falling from the top.
//!
//! A JSON file can override any subset of the fields:
//!
//! ```json
//! { "obstacle_speed": 4, "seed": 42 }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,

    pub player_width: u32,
    pub player_height: u32,
    /// Horizontal pixels moved per tick while a steering key is held
    pub player_speed: i32,
    /// Gap between the bottom of the car and the bottom of the window
    pub player_bottom_margin: i32,

    pub obstacle_width: u32,
    pub obstacle_height: u32,
    /// Vertical pixels fallen per tick
    pub obstacle_speed: i32,

    pub target_fps: u32,

    /// Top-left corner of the score text
    pub score_origin: (i32, i32),
    /// Bitmap font scale for both HUD texts (1 = 5x7 pixel glyphs)
    pub text_scale: u32,

    /// Fixed seed for obstacle placement. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_title: "Car Racing Game".to_string(),
            window_width: 800,
            window_height: 600,
            player_width: 50,
            player_height: 80,
            player_speed: 5,
            player_bottom_margin: 20,
            obstacle_width: 50,
            obstacle_height: 80,
            obstacle_speed: 3,
            target_fps: 60,
            score_origin: (10, 10),
            text_scale: 3,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads and validates a config from a JSON file
    ///
    /// Missing fields fall back to their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the game loop cannot run sensibly
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_width > self.window_width || self.obstacle_width > self.window_width {
            return Err(ConfigError::Invalid(format!(
                "car ({}) and obstacle ({}) must fit a {} px wide window",
                self.player_width, self.obstacle_width, self.window_width
            )));
        }
        if self.player_height as i32 + self.player_bottom_margin > self.window_height as i32 {
            return Err(ConfigError::Invalid(format!(
                "car of height {} with margin {} does not fit a {} px tall window",
                self.player_height, self.player_bottom_margin, self.window_height
            )));
        }
        if self.player_speed <= 0 || self.obstacle_speed <= 0 {
            return Err(ConfigError::Invalid("speeds must be positive".to_string()));
        }
        if self.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be at least 1".to_string()));
        }
        if self.text_scale == 0 {
            return Err(ConfigError::Invalid("text_scale must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Rightmost x the player car may occupy
    pub fn player_max_x(&self) -> i32 {
        self.window_width as i32 - self.player_width as i32
    }

    /// Rightmost x an obstacle may spawn at
    pub fn obstacle_max_x(&self) -> i32 {
        self.window_width as i32 - self.obstacle_width as i32
    }

    /// Horizontally centered start position of the car
    pub fn player_start_x(&self) -> i32 {
        self.window_width as i32 / 2 - self.player_width as i32 / 2
    }

    /// Fixed row of the car
    pub fn player_y(&self) -> i32 {
        self.window_height as i32 - self.player_height as i32 - self.player_bottom_margin
    }
}
