//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`InputCommand`]s and turns those into
//! engine intents with [`InputHandler`], which owns the card cursor. Mouse
//! clicks are hit-tested by the renderer and arrive here as positions.

pub mod handler;
pub mod map;

pub use tui_memory_types as types;

pub use handler::{InputHandler, Intent};
pub use map::{handle_key_event, should_quit, InputCommand};
