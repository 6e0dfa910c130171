//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame counted, never wall-clock timed
//! - Randomness only through an injected `RandomSource`
//! - Every transition returns a fresh state, inputs are never mutated
//! - No rendering or platform dependencies

pub mod collision;
pub mod object;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::check_collision;
pub use object::{GameObject, Sprite};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom};
pub use spawner::next_enemies;
pub use state::{GamePhase, GameState, Motion, Outcome, Scene};
pub use tick::{TickInput, jump_height, transition};
