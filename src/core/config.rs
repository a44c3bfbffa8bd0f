//! Game configuration.
//!
//! The board size and category count are fixed by the ruleset. What a
//! caller may tune:
//! - `throws_per_round`: throws before a category must be picked
//! - `bonus_threshold`: total needed for the bonus
//! - `seed`: RNG seed for the default dice roller

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Throws allowed per round in the standard game.
pub const NUM_THROWS: u8 = 3;

/// Points needed for the bonus in the standard game.
pub const BONUS_POINTS: u32 = 63;

/// Engine configuration.
///
/// ```
/// use rust_yatzy::core::GameConfig;
///
/// let config = GameConfig::default().with_seed(7);
/// assert_eq!(config.throws_per_round, 3);
/// assert_eq!(config.bonus_threshold, 63);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Throws per round, 1..=3.
    pub throws_per_round: u8,

    /// Total at or above which the bonus is granted.
    pub bonus_threshold: u32,

    /// Seed for the default `GameRng`.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            throws_per_round: NUM_THROWS,
            bonus_threshold: BONUS_POINTS,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of throws per round.
    #[must_use]
    pub fn with_throws_per_round(mut self, throws: u8) -> Self {
        self.throws_per_round = throws;
        self
    }

    /// Set the bonus threshold.
    #[must_use]
    pub fn with_bonus_threshold(mut self, points: u32) -> Self {
        self.bonus_threshold = points;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration.
    ///
    /// `throws_per_round` must be within 1..=3.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.throws_per_round == 0 {
            return Err(EngineError::InvalidConfig {
                msg: "throws_per_round must be at least 1".to_string(),
            });
        }
        if self.throws_per_round > NUM_THROWS {
            return Err(EngineError::InvalidConfig {
                msg: format!("throws_per_round must be at most {}", NUM_THROWS),
            });
        }
        Ok(())
    }
}
