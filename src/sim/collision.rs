//! Collision detection between game objects
//!
//! Center-distance overlap test. The vertical threshold adds half of the
//! *other* object's width rather than its height; this matches how the game
//! has always played and is kept as is.

use super::object::GameObject;

/// True when `a` and `b` overlap.
pub fn check_collision(a: &GameObject, b: &GameObject) -> bool {
    let delta = (a.center() - b.center()).abs();
    delta.x < a.width / 2.0 + b.width / 2.0 && delta.y < a.height / 2.0 + b.width / 2.0
}
