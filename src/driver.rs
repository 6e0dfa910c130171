//! Host-side game driver
//!
//! Owns the current state and the pending jump edge. The host calls
//! `press_jump`/`release_jump` from its key events and `tick` (or `update`
//! with elapsed time) from its frame callback, then reads `current_state`
//! to render. The simulation never calls back into the host.

use crate::consts::*;
use crate::highscores::HighScores;
use crate::sim::{GamePhase, GameState, RandomSource, SeededRandom, TickInput, transition};

/// Game instance holding all host-side state
#[derive(Debug, Clone)]
pub struct Driver<R: RandomSource> {
    state: GameState,
    rng: R,
    /// Edge waiting for the next tick
    pending_jump: bool,
    /// Key currently down; repeats while held do not create new edges
    jump_held: bool,
    accumulator: f32,
    tick_dt: f32,
    ticks: u64,
    high_scores: HighScores,
}

impl Driver<SeededRandom> {
    /// Driver with a seeded PCG source
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededRandom::new(seed))
    }
}

impl<R: RandomSource> Driver<R> {
    pub fn new(rng: R) -> Self {
        Self {
            state: GameState::Start,
            rng,
            pending_jump: false,
            jump_held: false,
            accumulator: 0.0,
            tick_dt: TICK_DT,
            ticks: 0,
            high_scores: HighScores::new(),
        }
    }

    /// Override the timestep used by `update`. Non-positive values are ignored.
    pub fn with_tick_dt(mut self, tick_dt: f32) -> Self {
        if tick_dt > 0.0 {
            self.tick_dt = tick_dt;
        }
        self
    }

    /// Jump key went down (or auto-repeated)
    pub fn press_jump(&mut self) {
        if !self.jump_held {
            self.jump_held = true;
            self.pending_jump = true;
        }
    }

    /// Jump key went up
    pub fn release_jump(&mut self) {
        self.jump_held = false;
    }

    /// Whether an unconsumed jump edge is waiting
    pub fn jump_pending(&self) -> bool {
        self.pending_jump
    }

    /// Advance exactly one tick, consuming any pending jump edge
    pub fn tick(&mut self) -> &GameState {
        let input = TickInput {
            jump: std::mem::take(&mut self.pending_jump),
        };
        let next = transition(&self.state, &input, &mut self.rng);
        self.observe(&next, &input);
        self.state = next;
        self.ticks += 1;
        &self.state
    }

    /// Run as many whole ticks as `dt` seconds cover (at most `MAX_SUBSTEPS`).
    /// Returns the number of ticks run.
    pub fn update(&mut self, dt: f32) -> u32 {
        // NaN or negative frame times would poison the accumulator
        let dt = if dt.is_finite() {
            dt.clamp(0.0, 0.1)
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.tick_dt && substeps < MAX_SUBSTEPS {
            self.tick();
            self.accumulator -= self.tick_dt;
            substeps += 1;
        }

        // Drop backlog we refused to simulate
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.tick_dt);
        }

        substeps
    }

    /// Read-only snapshot for rendering
    pub fn current_state(&self) -> &GameState {
        &self.state
    }

    /// Ticks run since the driver was created
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Log phase changes and record finished runs
    fn observe(&mut self, next: &GameState, input: &TickInput) {
        let prev = &self.state;

        if input.jump && next.jump_ticks() == Some(0) && prev.jump_ticks().is_none() {
            log::debug!("Jump at frame {}", next.frame());
        }

        if next.enemies().len() > prev.enemies().len() && prev.is_playing() {
            log::debug!(
                "Enemy spawned at frame {} ({} on screen)",
                prev.frame(),
                next.enemies().len()
            );
        }

        if prev.phase() == next.phase() {
            return;
        }

        match (prev.phase(), next.phase()) {
            (_, GamePhase::Playing) => log::info!("Run started"),
            (_, GamePhase::End) => {
                let Some(outcome) = next.outcome() else {
                    return;
                };
                log::info!(
                    "Run ended: {:?} (score {}, frame {})",
                    outcome,
                    next.score(),
                    next.frame()
                );
                if let Some(rank) = self.high_scores.record(outcome, next.score()) {
                    log::info!("New high score rank #{}", rank);
                }
            }
            (_, GamePhase::Start) => {}
        }
    }
}
