use crate::render::Surface;
use crate::text::draw_text;
use sdl2::pixels::Color;

/// Score counter anchored at a fixed top-left offset
#[derive(Debug, Clone)]
pub struct ScoreDisplay {
    pub x: i32,
    pub y: i32,
    pub scale: u32,
    pub color: Color,
}

impl ScoreDisplay {
    pub fn new(x: i32, y: i32, scale: u32) -> Self {
        ScoreDisplay {
            x,
            y,
            scale,
            color: Color::RGB(0, 0, 0),
        }
    }

    pub fn label(score: u32) -> String {
        format!("SCORE: {}", score)
    }

    pub fn render(&self, surface: &mut impl Surface, score: u32) -> Result<(), String> {
        draw_text(surface, &Self::label(score), self.x, self.y, self.color, self.scale)
    }
}
