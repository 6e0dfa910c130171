//! Jump Runner entry point
//!
//! Runs the game headless: loads settings, drives the simulation for a fixed
//! number of ticks and logs what happened.

use std::time::{SystemTime, UNIX_EPOCH};

use jump_runner::autopilot::should_jump;
use jump_runner::settings::DEFAULT_SETTINGS_PATH;
use jump_runner::sim::GameState;
use jump_runner::{Driver, Settings};

fn main() {
    env_logger::init();
    log::info!("Jump Runner (headless) starting...");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let settings = Settings::load(&path);

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Game initialized with seed: {}", seed);

    let mut driver = Driver::seeded(seed).with_tick_dt(settings.tick_dt());

    for _ in 0..settings.max_ticks {
        let state = driver.current_state();
        let jump = if settings.autopilot {
            should_jump(state)
        } else {
            matches!(state, GameState::Start)
        };
        if jump {
            driver.press_jump();
        }
        driver.tick();
        driver.release_jump();

        // Without the autopilot nobody presses restart
        if !settings.autopilot && driver.current_state().is_over() {
            break;
        }
    }

    let state = driver.current_state();
    println!(
        "Stopped after {} ticks: {:?} (score {}, frame {})",
        driver.ticks(),
        state.phase(),
        state.score(),
        state.frame()
    );
    let scores = driver.high_scores();
    println!("Runs finished: {}", scores.runs());
    for (i, entry) in scores.entries().iter().enumerate() {
        println!("{:>2}. {:>5} {:?}", i + 1, entry.score, entry.outcome);
    }
}
