//! Rectangular game objects and their sprites

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Visual asset handle. Identifies an image, never holds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Enemy,
    /// Player before evolution
    Player,
    /// Player after reaching the evolution score
    PlayerEvolved,
    /// Clear screen mascot
    Chicken,
}

impl Sprite {
    pub const ALL: [Sprite; 4] = [
        Sprite::Enemy,
        Sprite::Player,
        Sprite::PlayerEvolved,
        Sprite::Chicken,
    ];

    pub fn asset_path(&self) -> &'static str {
        match self {
            Sprite::Enemy => "./images/v1.svg",
            Sprite::Player => "./images/v2.svg",
            Sprite::PlayerEvolved => "./images/v3.svg",
            Sprite::Chicken => "./images/v4.svg",
        }
    }
}

/// Axis-aligned rectangle with a sprite. `x`/`y` is the top-left corner.
///
/// Plain value type: equal iff every field matches, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameObject {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub sprite: Sprite,
}

impl GameObject {
    /// Player standing on the ground, pre-evolution sprite
    pub fn player() -> Self {
        Self {
            x: PLAYER_X,
            y: GROUND_Y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            sprite: Sprite::Player,
        }
    }

    /// Player standing on the ground, evolved sprite
    pub fn evolved_player() -> Self {
        Self {
            sprite: Sprite::PlayerEvolved,
            ..Self::player()
        }
    }

    /// Freshly spawned enemy at the left edge
    pub fn enemy() -> Self {
        Self {
            x: 0.0,
            y: GROUND_Y,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            sprite: Sprite::Enemy,
        }
    }

    /// Mascot drawn on the clear screen
    pub fn chicken() -> Self {
        Self {
            x: CANVAS_WIDTH / 2.0 - CHICKEN_WIDTH / 2.0,
            y: CANVAS_HEIGHT / 2.0,
            width: CHICKEN_WIDTH,
            height: CHICKEN_HEIGHT,
            sprite: Sprite::Chicken,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    #[inline]
    pub fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }
}
