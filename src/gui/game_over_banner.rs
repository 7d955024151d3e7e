//! Game Over Banner
//!
//! Shown on top of the frozen road once the car has hit the obstacle.
//! It stays up until the player presses the restart key.

use crate::render::Surface;
use crate::text::draw_text_centered;
use sdl2::pixels::Color;

pub const GAME_OVER_MESSAGE: &str = "GAME OVER! PRESS R TO RESTART";

/// Centered restart prompt
#[derive(Debug, Clone)]
pub struct GameOverBanner {
    pub message: &'static str,
    pub color: Color,
    pub scale: u32,
}

impl GameOverBanner {
    pub fn new(scale: u32) -> Self {
        GameOverBanner {
            message: GAME_OVER_MESSAGE,
            color: Color::RGB(0, 0, 0),
            scale,
        }
    }

    /// Draws the message centered in a `width` x `height` screen
    pub fn render(&self, surface: &mut impl Surface, width: u32, height: u32) -> Result<(), String> {
        draw_text_centered(
            surface,
            self.message,
            width as i32 / 2,
            height as i32 / 2,
            self.color,
            self.scale,
        )
    }
}
