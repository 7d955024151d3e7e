// Game module - Game state and the frame loop
//
// This module contains:
// - state.rs: GameState aggregate (car, obstacle, score, phase) and its per-tick update
// - game_loop.rs: Game, which drives input -> update -> render -> pace

pub mod game_loop;
pub mod state;

pub use game_loop::{FrameControl, Game};
pub use state::{GameState, Phase, TickReport};
