use super::state::GameState;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::input_system::{GameAction, InputContext, InputSource};
use crate::pacing::FramePacer;
use crate::render::{SceneRenderer, Surface};
use crate::spawn::SpawnSource;
use log::{debug, info};

/// Whether the loop should keep going after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Quit,
}

/// Owns the game state and drives it one frame at a time
///
/// Platform pieces (input, display, pacing) are passed in by the caller so
/// the same loop runs against SDL2 in the binary and against scripted
/// stand-ins in tests.
pub struct Game<S: SpawnSource> {
    state: GameState,
    spawner: S,
    renderer: SceneRenderer,
    frames: u64,
}

impl<S: SpawnSource> Game<S> {
    pub fn new(config: &GameConfig, mut spawner: S) -> Self {
        let state = GameState::new(config, &mut spawner);
        Game {
            state,
            spawner,
            renderer: SceneRenderer::new(config),
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Runs frames until a quit is requested
    ///
    /// Returns the number of rendered frames. Only a failing draw call ends
    /// the loop early.
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        surface: &mut impl Surface,
        pacer: &mut impl FramePacer,
    ) -> Result<u64, GameError> {
        info!("Game loop started");

        while self.frame(input, surface)? == FrameControl::Continue {
            pacer.wait_for_next_frame();
        }

        info!("Quit requested");
        Ok(self.frames)
    }

    /// One iteration: drain events, update, render
    ///
    /// A quit event stops the frame right after the event drain; that frame
    /// is neither updated nor rendered.
    pub fn frame(
        &mut self,
        input: &mut impl InputSource,
        surface: &mut impl Surface,
    ) -> Result<FrameControl, GameError> {
        let context = InputContext::from(self.state.phase);
        let mut quit = false;

        for action in input.poll_actions(context) {
            match action {
                GameAction::Quit => quit = true,
                GameAction::Restart => {
                    if self.state.restart(&mut self.spawner) {
                        info!("Restarted");
                    }
                }
            }
        }

        if quit {
            return Ok(FrameControl::Quit);
        }

        let report = self.state.update(input.held_keys(), &mut self.spawner);
        if report.scored {
            debug!(
                "Obstacle passed, score {} (next lane x={})",
                self.state.score, self.state.obstacle.x
            );
        }
        if report.crashed {
            info!("Crashed with score {}", self.state.score);
        }

        self.renderer.render(surface, &self.state)?;
        self.frames += 1;

        Ok(FrameControl::Continue)
    }
}
