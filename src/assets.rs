//! Sprite readiness tracking
//!
//! Renderers load sprite images asynchronously. Readiness lives here, keyed
//! by `Sprite`, and never inside the simulation state.

use std::collections::HashSet;

use crate::sim::{GameState, Outcome, Sprite};

/// Which sprite images have finished loading
#[derive(Debug, Clone, Default)]
pub struct AssetCache {
    loaded: HashSet<Sprite>,
}

impl AssetCache {
    /// Every sprite pending
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_loaded(&mut self, sprite: Sprite) {
        if self.loaded.insert(sprite) {
            log::debug!("Sprite loaded: {}", sprite.asset_path());
        }
    }

    pub fn is_ready(&self, sprite: Sprite) -> bool {
        self.loaded.contains(&sprite)
    }

    pub fn all_ready(&self) -> bool {
        Sprite::ALL.iter().all(|s| self.is_ready(*s))
    }

    /// Sprites still loading, in declaration order
    pub fn pending(&self) -> Vec<Sprite> {
        Sprite::ALL
            .iter()
            .copied()
            .filter(|s| !self.is_ready(*s))
            .collect()
    }

    /// Whether every sprite needed to draw `state` is loaded
    pub fn ready_for(&self, state: &GameState) -> bool {
        if !self.is_ready(state.player().sprite) {
            return false;
        }
        if state.outcome() == Some(Outcome::GameClear) && !self.is_ready(Sprite::Chicken) {
            return false;
        }
        state.enemies().iter().all(|e| self.is_ready(e.sprite))
    }
}
