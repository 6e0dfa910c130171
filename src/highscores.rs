//! Session leaderboard
//!
//! Finished runs for the lifetime of the process. A clear always outranks a
//! game over; within the same outcome the higher score wins and ties keep the
//! earlier run ahead.

use serde::{Deserialize, Serialize};

use crate::sim::Outcome;

/// Maximum number of runs kept on the board
pub const MAX_HIGH_SCORES: usize = 10;

/// One finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub outcome: Outcome,
    pub score: u32,
}

impl RunResult {
    pub fn cleared(&self) -> bool {
        self.outcome == Outcome::GameClear
    }

    fn rank_key(&self) -> (bool, u32) {
        (self.cleared(), self.score)
    }
}

/// High score leaderboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    entries: Vec<RunResult>,
    /// Every run recorded, including those that fell off the board
    runs: u32,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished run. Returns its 1-indexed rank if it made the board.
    pub fn record(&mut self, outcome: Outcome, score: u32) -> Option<usize> {
        self.runs += 1;

        let result = RunResult { outcome, score };
        let key = result.rank_key();
        let pos = self.entries.partition_point(|e| e.rank_key() >= key);
        if pos >= MAX_HIGH_SCORES {
            return None;
        }

        self.entries.insert(pos, result);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(pos + 1)
    }

    /// Board entries, best first
    pub fn entries(&self) -> &[RunResult] {
        &self.entries
    }

    pub fn best(&self) -> Option<&RunResult> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs finished this session
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Cleared runs still on the board
    pub fn clears(&self) -> usize {
        self.entries.iter().filter(|e| e.cleared()).count()
    }
}
