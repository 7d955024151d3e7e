use crate::collision::Collidable;
use crate::config::GameConfig;
use crate::input_system::HeldKeys;
use sdl2::rect::Rect;

/// The car the player steers along the bottom of the window
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCar {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub speed: i32,
    max_x: i32,
}

impl PlayerCar {
    pub fn new(config: &GameConfig) -> Self {
        PlayerCar {
            x: config.player_start_x(),
            y: config.player_y(),
            width: config.player_width,
            height: config.player_height,
            speed: config.player_speed,
            max_x: config.player_max_x(),
        }
    }

    /// Moves the car one tick according to the held steering keys.
    ///
    /// Left and right are applied independently, each clamped at its own
    /// window edge, so holding both nets out to no movement away from the
    /// edges.
    pub fn steer(&mut self, held: HeldKeys) {
        if held.left && self.x > 0 {
            self.x = (self.x - self.speed).max(0);
        }
        if held.right && self.x < self.max_x {
            self.x = (self.x + self.speed).min(self.max_x);
        }
    }
}

impl Collidable for PlayerCar {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
