//! Engine configuration.

use crate::error::{validate_level, ConfigError};
use crate::types::DEFAULT_LEVEL;

/// Options fixed when a [`GameState`](crate::GameState) is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Grid side; must be positive and even.
    pub level: u8,
    /// Seed for dealing boards.
    pub seed: u64,
}

impl GameConfig {
    pub fn new(level: u8, seed: u64) -> Self {
        Self { level, seed }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_level(self.level).map(|_| ())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            seed: 1,
        }
    }
}
