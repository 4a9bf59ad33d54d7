//! Key mapping from terminal events to input commands.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the front end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Move the card cursor
    Move(Direction),
    /// Flip the card under the cursor
    Select,
    /// Send an action straight to the engine
    Action(GameAction),
    LevelUp,
    LevelDown,
}

/// Map keyboard input to input commands.
pub fn handle_key_event(key: KeyEvent) -> Option<InputCommand> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(InputCommand::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(InputCommand::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(InputCommand::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(InputCommand::Move(Direction::Down))
        }

        // Flip
        KeyCode::Char(' ') | KeyCode::Enter => Some(InputCommand::Select),

        // Controls
        KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(InputCommand::Action(GameAction::StartStop))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputCommand::Action(GameAction::Reset)),

        // Grid size
        KeyCode::Char('+') | KeyCode::Char('=') => Some(InputCommand::LevelUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(InputCommand::LevelDown),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
