use crate::collision::Collidable;
use crate::config::GameConfig;
use crate::spawn::SpawnSource;
use sdl2::rect::Rect;

/// The single block falling down the road
///
/// It enters just above the window, falls at a constant speed and, once it
/// has fully left the bottom edge, is sent back to the top in a new lane.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub speed: i32,
    max_x: i32,
}

impl Obstacle {
    /// Creates the obstacle already placed at its first spawn point
    pub fn spawn(config: &GameConfig, spawner: &mut impl SpawnSource) -> Self {
        let mut obstacle = Obstacle {
            x: 0,
            y: 0,
            width: config.obstacle_width,
            height: config.obstacle_height,
            speed: config.obstacle_speed,
            max_x: config.obstacle_max_x(),
        };
        obstacle.respawn(spawner);
        obstacle
    }

    /// Puts the obstacle back above the window in a freshly chosen lane
    pub fn respawn(&mut self, spawner: &mut impl SpawnSource) {
        self.y = self.spawn_y();
        self.x = spawner.next_x(self.max_x);
    }

    /// Falls one tick
    pub fn advance(&mut self) {
        self.y += self.speed;
    }

    /// True once the obstacle has dropped below a window of the given height
    pub fn has_passed(&self, window_height: i32) -> bool {
        self.y > window_height
    }

    /// Row the obstacle restarts from: one full height above the window
    pub fn spawn_y(&self) -> i32 {
        -(self.height as i32)
    }
}

impl Collidable for Obstacle {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
