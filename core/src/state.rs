//! Game state and the per-round rules.
//!
//! # Round lifecycle
//!
//! ```text
//! AwaitingGuess --evaluate_guess()--> Evaluated --advance_turn()--> AwaitingGuess
//! ```
//!
//! A state is created with its first number already drawn. The primality of
//! `current` is cached and recomputed on every draw, so `check_prime()` is
//! always consistent with [`is_prime`] of the number on screen.

use std::fmt;

use primegame_types::{GameSettings, GuessOutcome, Stats, is_prime, smallest_factor};

use crate::source::{NumberSource, ThreadRngSource};

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    AwaitingGuess,
    Evaluated,
}

#[derive(Debug)]
pub struct GameState<S = ThreadRngSource> {
    current: u64,
    range_max: u64,
    is_prime: bool,
    score: u64,
    level: u64,
    turns: u64,
    range_factor: u64,
    phase: RoundPhase,
    source: S,
}

impl GameState<ThreadRngSource> {
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self::with_source(settings, ThreadRngSource)
    }
}

impl<S: NumberSource> GameState<S> {
    /// Build a fresh game drawing numbers from `source`.
    pub fn with_source(settings: GameSettings, source: S) -> Self {
        let range_max = settings.range_max().get();
        let mut state = Self {
            current: 0,
            range_max,
            is_prime: false,
            score: 0,
            level: 0,
            turns: 0,
            range_factor: settings.range_factor(),
            phase: RoundPhase::AwaitingGuess,
            source,
        };
        state.draw_number(range_max);
        state
    }

    /// Draw a new `current` from `[0, range_max]` and refresh the primality cache.
    pub fn draw_number(&mut self, range_max: u64) -> u64 {
        let drawn = self.source.next_in(range_max).min(range_max);
        self.current = drawn;
        self.is_prime = is_prime(drawn);
        drawn
    }

    /// Apply a guess about the current number.
    ///
    /// A correct guess adds `current` to the score, grows the range by the
    /// configured factor and bumps the level. A wrong guess changes nothing
    /// but the round phase.
    pub fn evaluate_guess(&mut self, guess: bool) -> GuessOutcome {
        let outcome = if guess == self.is_prime {
            self.score = self.score.saturating_add(self.current);
            self.range_max = self.range_max.saturating_mul(self.range_factor);
            self.level += 1;
            GuessOutcome::Correct
        } else {
            GuessOutcome::Incorrect
        };
        self.phase = RoundPhase::Evaluated;

        tracing::debug!(
            current = self.current,
            guess,
            ?outcome,
            score = self.score,
            range_max = self.range_max,
            "Guess evaluated"
        );
        outcome
    }

    /// Finish the round: draw the next number and count the turn.
    pub fn advance_turn(&mut self) {
        if self.phase == RoundPhase::AwaitingGuess {
            tracing::debug!(current = self.current, "Advancing without a guess");
        }
        self.draw_number(self.range_max);
        self.turns += 1;
        self.phase = RoundPhase::AwaitingGuess;
    }

    /// `"<n> is the product of <a> * <b>"` when the current number is composite.
    #[must_use]
    pub fn factor_hint(&self) -> Option<String> {
        let factor = smallest_factor(self.current)?;
        Some(format!(
            "{} is the product of {} * {}",
            self.current,
            factor,
            self.current / factor
        ))
    }
}

impl<S> GameState<S> {
    #[must_use]
    pub fn current(&self) -> u64 {
        self.current
    }

    #[must_use]
    pub fn range_max(&self) -> u64 {
        self.range_max
    }

    #[must_use]
    pub fn check_prime(&self) -> bool {
        self.is_prime
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> u64 {
        self.level
    }

    #[must_use]
    pub fn turns(&self) -> u64 {
        self.turns
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats {
            level: self.level,
            score: self.score,
            turns: self.turns,
        }
    }
}

impl<S> fmt::Display for GameState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let not = if self.is_prime { "" } else { "not " };
        write!(
            f,
            "The current number, {} from the range 0-{} is {not}a prime!",
            self.current, self.range_max
        )
    }
}
