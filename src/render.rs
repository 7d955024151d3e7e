/// Frame rendering
///
/// The game draws nothing but filled rectangles: the road, the car, the
/// obstacle and the bitmap-font HUD. All of it goes through the [`Surface`]
/// trait so the renderer can be exercised without opening a window.
///
/// # Draw order
///
/// 1. Clear to the background color
/// 2. Player car
/// 3. Obstacle
/// 4. Score (always)
/// 5. Game over banner (only after a crash)
/// 6. Present
use crate::collision::Collidable;
use crate::config::GameConfig;
use crate::game::GameState;
use crate::gui::{GameOverBanner, ScoreDisplay};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Minimal drawing capability the game needs from a display
pub trait Surface {
    /// Fills the whole surface with `color`
    fn clear_to(&mut self, color: Color) -> Result<(), String>;

    fn fill(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Shows everything drawn since the last present
    fn present_frame(&mut self);
}

impl Surface for Canvas<Window> {
    fn clear_to(&mut self, color: Color) -> Result<(), String> {
        self.set_draw_color(color);
        self.clear();
        Ok(())
    }

    fn fill(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.set_draw_color(color);
        self.fill_rect(rect)
    }

    fn present_frame(&mut self) {
        self.present();
    }
}

/// Colors of the three things on the road
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: Color,
    pub player: Color,
    pub obstacle: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color::RGB(255, 255, 255), // White road
            player: Color::RGB(0, 0, 0),           // Black car
            obstacle: Color::RGB(255, 0, 0),       // Red block
        }
    }
}

/// Draws a whole frame from a [`GameState`]
pub struct SceneRenderer {
    palette: Palette,
    score_display: ScoreDisplay,
    game_over_banner: GameOverBanner,
    window_width: u32,
    window_height: u32,
}

impl SceneRenderer {
    pub fn new(config: &GameConfig) -> Self {
        let (score_x, score_y) = config.score_origin;
        SceneRenderer {
            palette: Palette::default(),
            score_display: ScoreDisplay::new(score_x, score_y, config.text_scale),
            game_over_banner: GameOverBanner::new(config.text_scale),
            window_width: config.window_width,
            window_height: config.window_height,
        }
    }

    pub fn render(&self, surface: &mut impl Surface, state: &GameState) -> Result<(), String> {
        surface.clear_to(self.palette.background)?;

        surface.fill(state.player.get_bounds(), self.palette.player)?;
        surface.fill(state.obstacle.get_bounds(), self.palette.obstacle)?;

        self.score_display.render(surface, state.score)?;

        if state.is_game_over() {
            self.game_over_banner
                .render(surface, self.window_width, self.window_height)?;
        }

        surface.present_frame();
        Ok(())
    }
}
