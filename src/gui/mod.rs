//! Screen-Space HUD
//!
//! Text elements drawn at fixed screen positions on top of the road.
//!
//! - [`ScoreDisplay`] - running score in the top-left corner
//! - [`GameOverBanner`] - centered restart prompt after a crash

pub mod game_over_banner;
pub mod score_display;

pub use game_over_banner::GameOverBanner;
pub use score_display::ScoreDisplay;
