//! TUI Memory (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces the
//! binary shares with tests: configuration, logging and the script driver.

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;

pub mod config;
pub mod logging;
pub mod script;
