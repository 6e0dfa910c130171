//! Property tests for the state machine

use jump_runner::consts::*;
use jump_runner::sim::{
    GameObject, GameState, Motion, Outcome, Scene, ScriptedRandom, SeededRandom, TickInput,
    transition,
};
use proptest::prelude::*;

fn replay(seed: u64, jumps: &[bool]) -> Vec<GameState> {
    let mut rng = SeededRandom::new(seed);
    let mut state = GameState::Start;
    let mut history = vec![state.clone()];
    for &jump in jumps {
        state = transition(&state, &TickInput { jump }, &mut rng);
        history.push(state.clone());
    }
    history
}

proptest! {
    #[test]
    fn prop_replay_is_deterministic(
        seed in any::<u64>(),
        jumps in prop::collection::vec(prop::bool::weighted(0.05), 0..400),
    ) {
        prop_assert_eq!(replay(seed, &jumps), replay(seed, &jumps));
    }

    #[test]
    fn prop_invariants_hold_every_tick(
        seed in any::<u64>(),
        jumps in prop::collection::vec(prop::bool::weighted(0.05), 1..600),
    ) {
        let history = replay(seed, &jumps);
        for (i, pair) in history.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            let jump = jumps[i];

            for enemy in next.enemies() {
                prop_assert!(enemy.x >= 0.0 && enemy.x < CANVAS_WIDTH);
            }

            if next.is_playing() {
                prop_assert_eq!(next.player().x, PLAYER_X);
                prop_assert!(next.player().y <= GROUND_Y);
                prop_assert!(next.score() <= CLEAR_SCORE);
            }

            match (prev, jump) {
                (GameState::End { .. }, false) | (GameState::Start, false) => {
                    prop_assert_eq!(next, prev);
                }
                (GameState::Playing { .. }, true) => {
                    prop_assert_eq!(next.frame(), prev.frame());
                    prop_assert_eq!(next.score(), prev.score());
                    prop_assert_eq!(next.enemies(), prev.enemies());
                }
                (GameState::Playing { .. }, false) if next.is_playing() => {
                    prop_assert_eq!(next.frame(), prev.frame() + 1);
                    prop_assert_eq!(next.score(), prev.score() + 1);
                }
                (GameState::Playing { scene, .. }, false) => {
                    // Ended this tick: everything but a clear's grounding carries over
                    prop_assert_eq!(next.frame(), scene.frame);
                    prop_assert_eq!(next.score(), scene.score);
                    prop_assert_eq!(next.enemies(), scene.enemies.as_slice());
                }
                (_, true) => {
                    prop_assert_eq!(next, &GameState::new_game());
                }
            }
        }
    }

    #[test]
    fn prop_jump_round_trip(frame in 1u32..1500, t_start in 0u32..10) {
        // No visited frame is a multiple of this, so nothing spawns
        let mut rng = ScriptedRandom::always(1_000_000);
        let running = GameState::Playing {
            scene: Scene { frame, score: frame, ..Scene::fresh() },
            motion: Motion::Running,
        };

        let mut state = transition(&running, &TickInput::jump(), &mut rng);
        prop_assert_eq!(state.jump_ticks(), Some(0));
        prop_assert_eq!(state.frame(), frame);
        prop_assert_eq!(state.score(), frame);

        // A pressed jump mid-air changes nothing
        for _ in 0..t_start {
            state = transition(&state, &TickInput::default(), &mut rng);
        }
        prop_assert_eq!(transition(&state, &TickInput::jump(), &mut rng), state.clone());

        let mut ticks = 0;
        while state.jump_ticks().is_some() {
            state = transition(&state, &TickInput::default(), &mut rng);
            ticks += 1;
            prop_assert!(ticks <= 100);
        }
        prop_assert!(state.is_playing());
        prop_assert_eq!(state.player().y, GROUND_Y);
    }

    #[test]
    fn prop_collision_beats_clear(
        score in CLEAR_SCORE..CLEAR_SCORE + 100,
        offset in -99.0f64..99.0,
        airborne in any::<bool>(),
    ) {
        let scene = Scene {
            enemies: vec![GameObject::enemy().with_x(PLAYER_X + offset)],
            frame: score,
            score,
            ..Scene::fresh()
        };
        let motion = if airborne { Motion::Jumping { t: 1 } } else { Motion::Running };
        let state = GameState::Playing { scene: scene.clone(), motion };
        let mut rng = ScriptedRandom::always(100);

        let next = transition(&state, &TickInput::default(), &mut rng);
        prop_assert_eq!(next, GameState::End { scene, outcome: Outcome::GameOver });
    }
}
