//! Game configuration.

use derive_more::{Display, Error};

use crate::types::{DEFAULT_PAIRS, FLIP_DELAY_MS, MAX_PAIRS, WIN_DELAY_MS};

/// Invalid game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// A board needs at least one pair.
    #[display("pair count must be at least 1")]
    NoPairs,
    /// More pairs than the symbol alphabet provides.
    #[display("pair count {requested} exceeds the {max} available symbols")]
    TooManyPairs { requested: usize, max: usize },
    /// A fixed layout where some symbol is not on exactly two cards.
    #[display("every symbol on the board must appear exactly twice")]
    UnpairedSymbols,
    /// A fixed layout whose size disagrees with the configured pair count.
    #[display("board holds {actual} pairs but {expected} are configured")]
    PairCountMismatch { expected: usize, actual: usize },
}

/// Tunable parameters for a [`Game`](crate::game::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of pairs (K); the board holds `2 * pairs` cards.
    pub pairs: usize,
    /// How long a revealed pair stays visible before evaluation.
    pub flip_delay_ms: u32,
    /// Pause between the final match and the win announcement.
    pub win_delay_ms: u32,
    /// Seed for the shuffler.
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pairs: DEFAULT_PAIRS,
            flip_delay_ms: FLIP_DELAY_MS,
            win_delay_ms: WIN_DELAY_MS,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn with_pairs(mut self, pairs: usize) -> Self {
        self.pairs = pairs;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_delays(mut self, flip_delay_ms: u32, win_delay_ms: u32) -> Self {
        self.flip_delay_ms = flip_delay_ms;
        self.win_delay_ms = win_delay_ms;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pairs == 0 {
            return Err(ConfigError::NoPairs);
        }
        if self.pairs > MAX_PAIRS {
            return Err(ConfigError::TooManyPairs {
                requested: self.pairs,
                max: MAX_PAIRS,
            });
        }
        Ok(())
    }
}
