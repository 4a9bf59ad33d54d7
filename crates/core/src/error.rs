//! Engine error types.
//!
//! Configuration problems are the only failures the engine reports. Interactive
//! misuse (selecting a matched card, a third card, a card while paused) is
//! ignored by the state machine and never surfaces here.

use thiserror::Error;

/// Rejected board configuration, raised before any board is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("level must be a positive even number, got 0")]
    NonPositiveLevel,
    #[error("level {0} is odd; {0}x{0} cards cannot be split into pairs")]
    OddLevel(u8),
    #[error("{0} cards cannot form a square grid with an even side")]
    NotSquare(usize),
    #[error("card value {value} appears {count} times, expected exactly 2")]
    UnpairedValue { value: u32, count: usize },
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::NonPositiveLevel | ConfigError::OddLevel(_) => "invalid_level",
            ConfigError::NotSquare(_) | ConfigError::UnpairedValue { .. } => "invalid_layout",
        }
    }
}

/// Validate a grid side, returning it unchanged when usable.
pub fn validate_level(level: u8) -> Result<u8, ConfigError> {
    if level == 0 {
        return Err(ConfigError::NonPositiveLevel);
    }
    if level % 2 != 0 {
        return Err(ConfigError::OddLevel(level));
    }
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_odd_levels_are_rejected() {
        assert_eq!(validate_level(0), Err(ConfigError::NonPositiveLevel));
        assert_eq!(validate_level(3), Err(ConfigError::OddLevel(3)));
        assert_eq!(validate_level(255), Err(ConfigError::OddLevel(255)));
    }

    #[test]
    fn even_levels_pass_through() {
        for level in [2u8, 4, 6, 8, 254] {
            assert_eq!(validate_level(level), Ok(level));
        }
    }

    #[test]
    fn codes_group_by_cause() {
        assert_eq!(ConfigError::OddLevel(5).code(), "invalid_level");
        assert_eq!(ConfigError::NotSquare(6).code(), "invalid_layout");
        assert_eq!(
            ConfigError::UnpairedValue { value: 1, count: 3 }.to_string(),
            "card value 1 appears 3 times, expected exactly 2"
        );
    }
}
