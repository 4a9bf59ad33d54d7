//! Core types module - shared constants and game actions
//!
//! Everything in here is plain data with no external dependencies, so it can be
//! used from the engine, the input layer, the renderer and the script driver alike.
//!
//! # Grid
//!
//! The board is a square grid whose side is the *level*. The level must be even
//! so the `level * level` cards split into whole pairs:
//!
//! | Level | Cards | Pairs |
//! |-------|-------|-------|
//! | 2 | 4 | 2 |
//! | 4 | 16 | 8 |
//! | 6 | 36 | 18 |
//! | 8 | 64 | 32 |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds unless the name says otherwise:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SESSION_SECONDS` | 60 | Countdown length of one session |
//! | `SECOND_MS` | 1000 | One countdown step |
//! | `FLIP_RESOLVE_MS` | 1000 | Delay before a flipped pair turns back |
//! | `TICK_MS` | 50 | Front-end tick interval |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{pair_count, GameAction, DEFAULT_LEVEL};
//!
//! assert_eq!(pair_count(DEFAULT_LEVEL), 8);
//! assert_eq!(GameAction::from_str("reset"), Some(GameAction::Reset));
//! assert_eq!(GameAction::SelectCard(3).as_str(), "select");
//! ```

/// Default grid side (4x4 = 16 cards, 8 pairs).
pub const DEFAULT_LEVEL: u8 = 4;

/// Smallest level the front end offers.
pub const MIN_LEVEL: u8 = 2;

/// Largest level the terminal front end offers.
///
/// The engine itself accepts any positive even level.
pub const MAX_LEVEL: u8 = 8;

/// Seconds on the clock at the start of every session.
pub const SESSION_SECONDS: u32 = 60;

/// Length of one countdown step.
pub const SECOND_MS: u32 = 1000;

/// Delay between the second card of a pair being flipped and the pair turning back.
pub const FLIP_RESOLVE_MS: u32 = 1000;

/// Front-end tick interval (the engine accepts arbitrary elapsed times).
pub const TICK_MS: u32 = 50;

/// Number of cards on a board of the given level.
pub const fn card_count(level: u8) -> usize {
    (level as usize) * (level as usize)
}

/// Number of distinct pair keys on a board of the given level.
pub const fn pair_count(level: u8) -> usize {
    card_count(level) / 2
}


/// Commands the front end (or a script) sends to the engine.
///
/// These are the only inbound intents the engine understands; everything else
/// (cursor movement, quitting) stays in the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Start a fresh session when idle/paused/over, pause when running
    StartStop,
    /// Return to the idle state without reshuffling
    Reset,
    /// Flip the card at the given board position
    SelectCard(usize),
}

impl GameAction {
    /// Parse an argument-free action from its name (case-insensitive).
    ///
    /// `SelectCard` carries a position and has no bare name, so it is never
    /// produced here.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("startStop"), Some(GameAction::StartStop));
    /// assert_eq!(GameAction::from_str("START"), Some(GameAction::StartStop));
    /// assert_eq!(GameAction::from_str("select"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "startstop" | "start_stop" | "start" | "stop" => Some(GameAction::StartStop),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// Short name used in logs and scripts
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::StartStop => "startStop",
            GameAction::Reset => "reset",
            GameAction::SelectCard(_) => "select",
        }
    }
}

/// Cursor movement on the card grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
