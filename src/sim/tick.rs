//! Per-tick state transition
//!
//! Core game loop step. Given the current state and this tick's input,
//! builds the next state. Total and deterministic for a given `RandomSource`.

use super::collision::check_collision;
use super::object::GameObject;
use super::rng::RandomSource;
use super::spawner::next_enemies;
use super::state::{GameState, Motion, Outcome, Scene};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump edge: one per key press, already coalesced by the host
    pub jump: bool,
}

impl TickInput {
    pub fn jump() -> Self {
        Self { jump: true }
    }
}

/// Player top edge `t` ticks into a jump. Values above `GROUND_Y` mean landed.
#[inline]
pub fn jump_height(t: u32) -> f64 {
    let t = f64::from(t);
    0.5 * GRAVITY * t * t - JUMP_VELOCITY * t + GROUND_Y
}

/// Advance the game by one tick
///
/// A jump edge is consumed on its own: it starts a run from `Start` or `End`,
/// takes off from `Running`, and is ignored mid-air. Nothing else moves on that
/// tick. Without a jump, `Playing` first resolves collision then the clear
/// score, and only advances physics, enemies, frame and score if neither fired.
pub fn transition<R: RandomSource + ?Sized>(
    state: &GameState,
    input: &TickInput,
    rng: &mut R,
) -> GameState {
    if input.jump {
        return match state {
            GameState::Start | GameState::End { .. } => GameState::new_game(),
            GameState::Playing {
                scene,
                motion: Motion::Running,
            } => GameState::Playing {
                scene: scene.clone(),
                motion: Motion::Jumping { t: 0 },
            },
            GameState::Playing {
                motion: Motion::Jumping { .. },
                ..
            } => state.clone(),
        };
    }

    match state {
        GameState::Start | GameState::End { .. } => state.clone(),
        GameState::Playing { scene, motion } => {
            resolve_end(scene).unwrap_or_else(|| advance(scene, *motion, rng))
        }
    }
}

/// Terminal check for a live scene. Collision wins over clearing.
fn resolve_end(scene: &Scene) -> Option<GameState> {
    if scene
        .enemies
        .iter()
        .any(|enemy| check_collision(enemy, &scene.player))
    {
        return Some(GameState::End {
            scene: scene.clone(),
            outcome: Outcome::GameOver,
        });
    }

    if scene.score >= CLEAR_SCORE {
        return Some(GameState::End {
            scene: Scene {
                player: scene.player.with_y(GROUND_Y),
                ..scene.clone()
            },
            outcome: Outcome::GameClear,
        });
    }

    None
}

fn advance<R: RandomSource + ?Sized>(scene: &Scene, motion: Motion, rng: &mut R) -> GameState {
    let base = if scene.score < EVOLUTION_SCORE {
        GameObject::player()
    } else {
        GameObject::evolved_player()
    };

    let (player, motion) = match motion {
        Motion::Running => (base, Motion::Running),
        Motion::Jumping { t } => {
            let y = jump_height(t);
            if y <= GROUND_Y {
                (base.with_y(y), Motion::Jumping { t: t + 1 })
            } else {
                (base.with_y(GROUND_Y), Motion::Running)
            }
        }
    };

    GameState::Playing {
        scene: Scene {
            player,
            frame: scene.frame + 1,
            enemies: next_enemies(&scene.enemies, scene.frame, rng),
            score: scene.score + 1,
        },
        motion,
    }
}
