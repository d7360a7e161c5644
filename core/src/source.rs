//! Where candidate numbers come from.

/// Supplies numbers for [`GameState`](crate::GameState) draws.
///
/// Implementations should return a value in `[0, max]`; the game clamps
/// anything larger.
pub trait NumberSource {
    fn next_in(&mut self, max: u64) -> u64;
}

/// Uniform draws from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl NumberSource for ThreadRngSource {
    fn next_in(&mut self, max: u64) -> u64 {
        rand::random_range(0..=max)
    }
}

/// Any `FnMut(max) -> n` closure is a source, which makes replaying a game easy.
impl<F> NumberSource for F
where
    F: FnMut(u64) -> u64,
{
    fn next_in(&mut self, max: u64) -> u64 {
        self(max)
    }
}
