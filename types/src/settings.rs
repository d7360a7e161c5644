//! Resolved game settings shared across crates.
//!
//! Raw values arrive signed (from TOML or callers) and are validated once at
//! the parse boundary. Holding a [`GameSettings`] proves the range is
//! non-negative and the growth factor is at least 1.

use serde::Deserialize;

use thiserror::Error;

pub const DEFAULT_RANGE_MAX: u64 = 10;
pub const DEFAULT_RANGE_FACTOR: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("range upper bound must not be negative (got {0})")]
    Negative(i64),
}

/// Inclusive upper bound of a random draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RangeMax(u64);

impl RangeMax {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for RangeMax {
    type Error = RangeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| RangeError::Negative(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameSettingsError {
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("range_factor must be at least 1 (got {0})")]
    FactorTooSmall(i64),
}

fn default_range_max() -> i64 {
    DEFAULT_RANGE_MAX as i64
}

fn default_range_factor() -> i64 {
    DEFAULT_RANGE_FACTOR as i64
}

#[derive(Deserialize)]
struct RawGameSettings {
    #[serde(default = "default_range_max")]
    range_max: i64,
    #[serde(default = "default_range_factor")]
    range_factor: i64,
}

/// Validated starting range and growth factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawGameSettings")]
pub struct GameSettings {
    range_max: RangeMax,
    range_factor: u64,
}

impl TryFrom<RawGameSettings> for GameSettings {
    type Error = GameSettingsError;

    fn try_from(raw: RawGameSettings) -> Result<Self, Self::Error> {
        Self::from_raw(raw.range_max, raw.range_factor)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            range_max: RangeMax::new(DEFAULT_RANGE_MAX),
            range_factor: DEFAULT_RANGE_FACTOR,
        }
    }
}

impl GameSettings {
    #[must_use]
    pub const fn new(range_max: RangeMax, range_factor: u64) -> Self {
        // A zero factor would collapse the range to [0, 0] after one correct guess.
        let range_factor = if range_factor == 0 { 1 } else { range_factor };
        Self {
            range_max,
            range_factor,
        }
    }

    /// Validate signed values, e.g. from a config file or command line.
    pub fn from_raw(range_max: i64, range_factor: i64) -> Result<Self, GameSettingsError> {
        let range_max = RangeMax::try_from(range_max)?;
        let range_factor = match u64::try_from(range_factor) {
            Ok(factor) if factor >= 1 => factor,
            _ => return Err(GameSettingsError::FactorTooSmall(range_factor)),
        };
        Ok(Self {
            range_max,
            range_factor,
        })
    }

    #[must_use]
    pub const fn range_max(&self) -> RangeMax {
        self.range_max
    }

    #[must_use]
    pub const fn range_factor(&self) -> u64 {
        self.range_factor
    }
}
