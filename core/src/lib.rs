//! Core game logic for Prime or not a Prime.
//!
//! This crate owns the mutable side of the game: the [`GameState`] with its
//! per-round rules, the [`NumberSource`] seam used for random draws, and the
//! [`Session`] loop that drives a state from a line-based reader and writer.

mod session;
mod source;
mod state;

pub use session::{PROMPT, REPROMPT, RoundResult, Session, SessionError, SessionOptions};
pub use source::{NumberSource, ThreadRngSource};
pub use state::{GameState, RoundPhase};
