//! The interactive round loop.
//!
//! A [`Session`] owns the [`GameState`] and talks to the player through any
//! `BufRead`/`Write` pair: the locked terminal in the binary, byte buffers in
//! tests.
//!
//! ```text
//! greet -> [ show number -> read answer -> evaluate -> report -> advance ]*
//!                              |
//!                              +-- quit --> Ok(final stats)
//! ```

use std::io::{self, BufRead, Write};

use thiserror::Error;

use primegame_types::{Answer, GuessOutcome, Stats};

use crate::source::{NumberSource, ThreadRngSource};
use crate::state::GameState;

pub const PROMPT: &str = "Is this a prime? y/n";
pub const REPROMPT: &str = "Please answer in yes or no";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input closed while waiting for an answer")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Presentation switches for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// After a wrong guess on a composite number, name one of its factors.
    pub show_factors: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { show_factors: true }
    }
}

/// What happened in a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    Played(GuessOutcome),
    Quit,
}

pub struct Session<R, W, S = ThreadRngSource> {
    input: R,
    output: W,
    state: GameState<S>,
    options: SessionOptions,
    line: Vec<u8>,
}

impl<R, W, S> Session<R, W, S>
where
    R: BufRead,
    W: Write,
    S: NumberSource,
{
    pub fn new(input: R, output: W, state: GameState<S>, options: SessionOptions) -> Self {
        Self {
            input,
            output,
            state,
            options,
            line: Vec::new(),
        }
    }

    /// Play rounds until the player quits.
    ///
    /// Returns the final stats on quit. Nothing is written after the quit
    /// token is read.
    pub fn run(&mut self) -> Result<Stats, SessionError> {
        tracing::info!(
            range_max = self.state.range_max(),
            show_factors = self.options.show_factors,
            "Session started"
        );
        self.greet()?;

        loop {
            if self.play_round()? == RoundResult::Quit {
                let stats = self.state.stats();
                tracing::info!(%stats, "Player quit");
                return Ok(stats);
            }
        }
    }

    pub fn greet(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "Hello,")?;
        writeln!(self.output, "Welcome to \"Prime or not a Prime\"")?;
        Ok(())
    }

    /// Show the current number, wait for an answer and apply it.
    pub fn play_round(&mut self) -> Result<RoundResult, SessionError> {
        writeln!(self.output, "{}", self.state.current())?;
        writeln!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let Some(guess) = self.read_answer()?.guess() else {
            return Ok(RoundResult::Quit);
        };

        let outcome = self.state.evaluate_guess(guess);
        writeln!(self.output, "{outcome}")?;
        if self.options.show_factors
            && !outcome.is_correct()
            && let Some(hint) = self.state.factor_hint()
        {
            writeln!(self.output, "{hint}")?;
        }
        writeln!(self.output, "{}", self.state)?;

        self.state.advance_turn();
        writeln!(self.output, "{}", self.state.stats())?;
        self.output.flush()?;

        Ok(RoundResult::Played(outcome))
    }

    fn read_answer(&mut self) -> Result<Answer, SessionError> {
        loop {
            self.line.clear();
            if self.input.read_until(b'\n', &mut self.line)? == 0 {
                return Err(SessionError::InputClosed);
            }
            // Undecodable bytes are just another unrecognized answer.
            let line = String::from_utf8_lossy(&self.line);
            if let Some(answer) = Answer::parse(&line) {
                return Ok(answer);
            }
            tracing::debug!(input = line.trim(), "Unrecognized answer");
            writeln!(self.output, "{REPROMPT}")?;
            self.output.flush()?;
        }
    }
}

impl<R, W, S> Session<R, W, S> {
    #[must_use]
    pub fn into_state(self) -> GameState<S> {
        self.state
    }
}
