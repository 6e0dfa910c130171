//! Game state and core simulation types
//!
//! `GameState` is a closed tagged union. Every variant past `Start` carries a
//! `Scene`; the transition function in `tick` builds new values and never
//! edits an existing one.

use serde::{Deserialize, Serialize};

use super::object::GameObject;

/// Fields shared by every state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub player: GameObject,
    /// Ticks advanced since the run started
    pub frame: u32,
    /// Live enemies in spawn order, oldest first
    pub enemies: Vec<GameObject>,
    pub score: u32,
}

impl Scene {
    /// Scene of a run that has not advanced yet
    pub fn fresh() -> Self {
        Self {
            player: GameObject::player(),
            frame: 0,
            enemies: Vec::new(),
            score: 0,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::fresh()
    }
}

/// What the player is doing while a run is live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    /// On the ground
    Running,
    /// Airborne, `t` ticks since take-off
    Jumping { t: u32 },
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Hit an enemy
    GameOver,
    /// Reached the clear score
    GameClear,
}

/// Broad phase, for hosts that only care about the outer variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Start,
    Playing,
    End,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    /// Title screen, waiting for the first jump press
    #[default]
    Start,
    /// Live run
    Playing { scene: Scene, motion: Motion },
    /// Finished run, frozen until the next jump press
    End { scene: Scene, outcome: Outcome },
}

impl GameState {
    /// Fresh run with the player on the ground
    pub fn new_game() -> Self {
        GameState::Playing {
            scene: Scene::fresh(),
            motion: Motion::Running,
        }
    }

    pub fn phase(&self) -> GamePhase {
        match self {
            GameState::Start => GamePhase::Start,
            GameState::Playing { .. } => GamePhase::Playing,
            GameState::End { .. } => GamePhase::End,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GameState::Playing { .. })
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GameState::End { .. })
    }

    /// Scene of a live or finished run. `None` on the title screen.
    pub fn scene(&self) -> Option<&Scene> {
        match self {
            GameState::Start => None,
            GameState::Playing { scene, .. } | GameState::End { scene, .. } => Some(scene),
        }
    }

    pub fn player(&self) -> GameObject {
        self.scene()
            .map(|s| s.player)
            .unwrap_or_else(GameObject::player)
    }

    pub fn frame(&self) -> u32 {
        self.scene().map_or(0, |s| s.frame)
    }

    pub fn enemies(&self) -> &[GameObject] {
        match self.scene() {
            Some(scene) => &scene.enemies,
            None => &[],
        }
    }

    pub fn score(&self) -> u32 {
        self.scene().map_or(0, |s| s.score)
    }

    /// Jump counter while airborne
    pub fn jump_ticks(&self) -> Option<u32> {
        match self {
            GameState::Playing {
                motion: Motion::Jumping { t },
                ..
            } => Some(*t),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameState::End { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }
}
