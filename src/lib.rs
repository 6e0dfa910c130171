//! Jump Runner - A side-scrolling avoidance game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `driver`: Host-side tick loop and jump edge coalescing
//! - `autopilot`: Demo mode that plays the game on its own
//! - `assets`: Sprite readiness tracking for renderers
//! - `highscores`: Session leaderboard
//! - `settings`: Runtime configuration

pub mod assets;
pub mod autopilot;
pub mod driver;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use driver::Driver;
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Host tick length (60 Hz, nominal)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f64 = 800.0;
    pub const CANVAS_HEIGHT: f64 = 600.0;
    /// Top edge of anything standing on the ground
    pub const GROUND_Y: f64 = 400.0;

    /// Score at which the player sprite evolves
    pub const EVOLUTION_SCORE: u32 = 1000;
    /// Score that ends the run as cleared
    pub const CLEAR_SCORE: u32 = 2000;

    /// Player defaults - fixed column, only moves vertically
    pub const PLAYER_X: f64 = 600.0;
    pub const PLAYER_WIDTH: f64 = 100.0;
    pub const PLAYER_HEIGHT: f64 = 100.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f64 = 100.0;
    pub const ENEMY_HEIGHT: f64 = 100.0;
    /// Horizontal distance an enemy travels per tick
    pub const ENEMY_SPEED: f64 = 8.0;
    /// Candidate spawn intervals, one is drawn every tick
    pub const SPAWN_INTERVALS: [u32; 2] = [100, 200];

    /// Clear screen mascot
    pub const CHICKEN_WIDTH: f64 = 200.0;
    pub const CHICKEN_HEIGHT: f64 = 200.0;

    /// Jump physics (per tick units)
    pub const GRAVITY: f64 = 0.4;
    pub const JUMP_VELOCITY: f64 = 13.0;
}
