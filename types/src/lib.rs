//! Core domain types for Prime or not a Prime.
//!
//! This crate contains pure domain types with no IO and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod answer;
mod primes;
mod settings;

pub use answer::Answer;
pub use primes::{is_prime, smallest_factor};
pub use settings::{
    DEFAULT_RANGE_FACTOR, DEFAULT_RANGE_MAX, GameSettings, GameSettingsError, RangeError, RangeMax,
};

use std::fmt;

// ============================================================================
// Round Results
// ============================================================================

/// Result of comparing a guess against the cached primality of the current number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
}

impl GuessOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, GuessOutcome::Correct)
    }

    /// Line shown to the player after a guess.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            GuessOutcome::Correct => "Correct!",
            GuessOutcome::Incorrect => "Too bad!",
        }
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Snapshot of the progress counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub level: u64,
    pub score: u64,
    pub turns: u64,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Level: {} | Score: {} | Turns: {}",
            self.level, self.score, self.turns
        )
    }
}
