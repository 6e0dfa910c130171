//! Enemy movement and spawning

use super::object::GameObject;
use super::rng::RandomSource;
use crate::consts::*;

/// Advance every enemy one tick and maybe spawn a new one.
///
/// Enemies move right by `ENEMY_SPEED`; any that reach `CANVAS_WIDTH` are
/// dropped. An interval is then drawn from `SPAWN_INTERVALS` on every call and
/// a new enemy is appended when `frame` is a multiple of it, so spawns follow
/// an irregular timer rather than a fixed period.
pub fn next_enemies<R: RandomSource + ?Sized>(
    enemies: &[GameObject],
    frame: u32,
    rng: &mut R,
) -> Vec<GameObject> {
    let mut next: Vec<GameObject> = enemies
        .iter()
        .map(|e| e.with_x(e.x + ENEMY_SPEED))
        .filter(|e| e.x < CANVAS_WIDTH)
        .collect();

    let interval = rng.choose(&SPAWN_INTERVALS);
    if interval != 0 && frame % interval == 0 {
        next.push(GameObject::enemy());
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ScriptedRandom;

    #[test]
    fn test_enemies_advance() {
        let enemies = vec![GameObject::enemy(), GameObject::enemy().with_x(100.0)];
        let mut rng = ScriptedRandom::always(100);
        let next = next_enemies(&enemies, 1, &mut rng);
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].x, 8.0);
        assert_eq!(next[1].x, 108.0);
        // Input untouched
        assert_eq!(enemies[0].x, 0.0);
    }

    #[test]
    fn test_enemy_at_edge_dropped() {
        let enemies = vec![GameObject::enemy().with_x(792.0)];
        let mut rng = ScriptedRandom::always(100);
        assert!(next_enemies(&enemies, 1, &mut rng).is_empty());

        let enemies = vec![GameObject::enemy().with_x(784.0)];
        let next = next_enemies(&enemies, 1, &mut rng);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].x, 792.0);
    }

    #[test]
    fn test_spawn_on_interval() {
        let mut rng = ScriptedRandom::always(100);
        let next = next_enemies(&[], 0, &mut rng);
        assert_eq!(next, vec![GameObject::enemy()]);

        let next = next_enemies(&[], 300, &mut rng);
        assert_eq!(next.len(), 1);

        assert!(next_enemies(&[], 150, &mut rng).is_empty());
    }

    #[test]
    fn test_spawn_interval_redrawn_every_call() {
        // Frame 100 spawns only when the draw for that call is 100
        let mut rng = ScriptedRandom::new(vec![200, 100]);
        assert!(next_enemies(&[], 100, &mut rng).is_empty());
        assert_eq!(next_enemies(&[], 100, &mut rng).len(), 1);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn test_spawn_appended_after_existing() {
        let enemies = vec![GameObject::enemy().with_x(400.0)];
        let mut rng = ScriptedRandom::always(200);
        let next = next_enemies(&enemies, 400, &mut rng);
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].x, 408.0);
        assert_eq!(next[1], GameObject::enemy());
    }
}
