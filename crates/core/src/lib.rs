//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the memory game's rules and state machine. It has **no
//! dependencies** on terminals, clocks or I/O:
//!
//! - **Deterministic**: boards are dealt from a caller-supplied seed
//! - **Clockless**: time only moves when [`GameState::tick`] is called
//! - **Single chokepoint**: every state change goes through a named transition
//!
//! # Module Structure
//!
//! - [`board`]: dealt grid of cards and layout validation
//! - [`game_state`]: session state machine (timer, flips, matches, win/lose)
//! - [`rng`]: seeded generator and unbiased Fisher-Yates shuffle
//! - [`timers`]: countdown and flip-resolution delays
//! - [`snapshot`]: read-only state copy for renderers
//!
//! # Game Rules
//!
//! - A session lasts 60 seconds; the clock only runs while the session is active
//! - Two cards can be face up at once; a matching pair stays face up for good
//! - One second after the second card flips, the face-up pair turns back over
//! - Finding every pair wins; the clock reaching zero loses
//! - Starting (also after a pause) always begins a fresh session
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{Board, GameOutcome, GameState};
//! use tui_memory_types::{GameAction, FLIP_RESOLVE_MS};
//!
//! let board = Board::from_values(&[1, 2, 1, 2]).unwrap();
//! let mut game = GameState::with_board(board);
//! game.apply_action(GameAction::StartStop);
//!
//! game.apply_action(GameAction::SelectCard(0));
//! game.apply_action(GameAction::SelectCard(2));
//! game.tick(FLIP_RESOLVE_MS);
//! game.apply_action(GameAction::SelectCard(1));
//! game.apply_action(GameAction::SelectCard(3));
//!
//! assert_eq!(game.outcome(), Some(GameOutcome::Won));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod timers;

pub use tui_memory_types as types;

pub use board::{Board, Card};
pub use config::GameConfig;
pub use error::{validate_level, ConfigError};
pub use game_state::{GameOutcome, GameState};
pub use rng::DeckRng;
pub use snapshot::{CardFace, GameSnapshot};
pub use timers::{PendingClear, SecondTimer};
