use crate::collision::collides;
use crate::config::GameConfig;
use crate::input_system::HeldKeys;
use crate::obstacle::Obstacle;
use crate::player::PlayerCar;
use crate::spawn::SpawnSource;

/// Whether the simulation is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// The car hit the obstacle; everything is frozen until restart
    GameOver,
}

/// What happened during one update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The obstacle left the screen and a point was scored
    pub scored: bool,
    /// The car hit the obstacle this tick
    pub crashed: bool,
}

/// Complete game state
///
/// Created once at startup and reset in place on restart.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub player: PlayerCar,
    pub obstacle: Obstacle,
    pub score: u32,
    pub phase: Phase,
    window_height: i32,
}

impl GameState {
    pub fn new(config: &GameConfig, spawner: &mut impl SpawnSource) -> Self {
        GameState {
            player: PlayerCar::new(config),
            obstacle: Obstacle::spawn(config, spawner),
            score: 0,
            phase: Phase::Playing,
            window_height: config.window_height as i32,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Starts a new run after a crash
    ///
    /// Resets the score and sends the obstacle back to the top in a new
    /// lane. The car keeps its position. Does nothing while still playing;
    /// returns whether a restart happened.
    pub fn restart(&mut self, spawner: &mut impl SpawnSource) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }

        self.phase = Phase::Playing;
        self.score = 0;
        self.obstacle.respawn(spawner);
        true
    }

    /// Advances the simulation by one tick
    ///
    /// Order matters: steer, fall, respawn-and-score, then collide. A freshly
    /// respawned obstacle is above the window, so it can never crash into
    /// the car on the tick it respawned.
    pub fn update(&mut self, held: HeldKeys, spawner: &mut impl SpawnSource) -> TickReport {
        let mut report = TickReport::default();
        if self.is_game_over() {
            return report;
        }

        self.player.steer(held);
        self.obstacle.advance();

        if self.obstacle.has_passed(self.window_height) {
            self.obstacle.respawn(spawner);
            self.score += 1;
            report.scored = true;
        }

        if collides(&self.player, &self.obstacle) {
            self.phase = Phase::GameOver;
            report.crashed = true;
        }

        report
    }
}
