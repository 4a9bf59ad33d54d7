//! Terminal "game renderer" module.
//!
//! Renders the memory game into a plain framebuffer that is then flushed to the
//! terminal with crossterm. No widget toolkit is involved.
//!
//! - [`fb`]: framebuffer and cell styles
//! - [`game_view`]: pure snapshot → framebuffer mapping, plus mouse hit testing
//! - [`renderer`]: diffing terminal writer
//! - [`render_throttle`]: decides when a redraw is worth it

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{CardSize, GameView, GridLayout, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
