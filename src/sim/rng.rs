//! Injectable randomness for the simulation
//!
//! The simulation never owns a generator. Callers pass a `RandomSource`, so
//! runs can be seeded for replay or fully scripted in tests.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform picks.
pub trait RandomSource {
    /// Pick one of `options` uniformly. `options` must be non-empty.
    fn choose(&mut self, options: &[u32]) -> u32;
}

/// Seeded PCG generator
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn choose(&mut self, options: &[u32]) -> u32 {
        debug_assert!(!options.is_empty(), "choose needs at least one option");
        options[self.rng.random_range(0..options.len())]
    }
}

/// Replays a fixed list of picks, cycling when exhausted.
///
/// Picks are returned verbatim even if they are not among `options`.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    picks: Vec<u32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(picks: Vec<u32>) -> Self {
        Self { picks, cursor: 0 }
    }

    /// Always returns `pick`
    pub fn always(pick: u32) -> Self {
        Self::new(vec![pick])
    }

    /// Number of picks served so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn choose(&mut self, options: &[u32]) -> u32 {
        debug_assert!(!options.is_empty(), "choose needs at least one option");
        let pick = if self.picks.is_empty() {
            options[0]
        } else {
            self.picks[self.cursor % self.picks.len()]
        };
        self.cursor += 1;
        pick
    }
}
