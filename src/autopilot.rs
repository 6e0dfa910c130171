//! Demo mode - the game plays itself
//!
//! Presses jump to leave the title and end screens, and takes off when the
//! nearest incoming enemy enters a window the jump arc is known to clear.

use crate::sim::{GameState, Motion};

/// Leftmost enemy `x` that triggers a jump
pub const TRIGGER_MIN_X: f64 = 300.0;
/// Rightmost enemy `x` that triggers a jump. Later take-offs land on the enemy.
pub const TRIGGER_MAX_X: f64 = 420.0;

/// Whether the autopilot wants a jump edge this tick
pub fn should_jump(state: &GameState) -> bool {
    match state {
        GameState::Start | GameState::End { .. } => true,
        GameState::Playing {
            motion: Motion::Jumping { .. },
            ..
        } => false,
        GameState::Playing {
            scene,
            motion: Motion::Running,
        } => scene
            .enemies
            .iter()
            .any(|e| (TRIGGER_MIN_X..=TRIGGER_MAX_X).contains(&e.x)),
    }
}
