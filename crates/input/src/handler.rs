//! Card cursor and intent routing.
//!
//! The engine only knows board positions; this handler keeps the keyboard
//! cursor on the grid and converts [`InputCommand`]s into [`Intent`]s.

use crate::map::InputCommand;
use crate::types::{Direction, GameAction, MAX_LEVEL, MIN_LEVEL};

/// What the front end should do in response to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Game(GameAction),
    /// Deal a new board of this level
    ChangeLevel(u8),
}

/// Tracks the cursor on a square grid of `level * level` cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputHandler {
    level: u8,
    cursor: usize,
}

impl InputHandler {
    pub fn new(level: u8) -> Self {
        Self { level, cursor: 0 }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Follow a board change; the cursor goes back to the first card.
    pub fn set_level(&mut self, level: u8) {
        self.level = level;
        self.cursor = 0;
    }

    pub fn handle(&mut self, command: InputCommand) -> Option<Intent> {
        match command {
            InputCommand::Move(direction) => {
                self.move_cursor(direction);
                None
            }
            InputCommand::Select => Some(Intent::Game(GameAction::SelectCard(self.cursor))),
            InputCommand::Action(action) => Some(Intent::Game(action)),
            InputCommand::LevelUp => self.step_level(2),
            InputCommand::LevelDown => self.step_level(-2),
        }
    }

    /// A click landed on `position`: move the cursor there and flip it.
    pub fn point_at(&mut self, position: usize) -> Option<Intent> {
        if position >= self.card_count() {
            return None;
        }
        self.cursor = position;
        Some(Intent::Game(GameAction::SelectCard(position)))
    }

    /// Move the cursor, stopping at the grid edges. Returns true if it moved.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        let side = self.level as usize;
        if side == 0 {
            return false;
        }
        let (col, row) = (self.cursor % side, self.cursor / side);
        let (col, row) = match direction {
            Direction::Left => (col.saturating_sub(1), row),
            Direction::Right => ((col + 1).min(side - 1), row),
            Direction::Up => (col, row.saturating_sub(1)),
            Direction::Down => (col, (row + 1).min(side - 1)),
        };
        let next = row * side + col;
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }

    fn card_count(&self) -> usize {
        (self.level as usize) * (self.level as usize)
    }

    fn step_level(&self, delta: i16) -> Option<Intent> {
        let next = (self.level as i16 + delta).clamp(MIN_LEVEL as i16, MAX_LEVEL as i16) as u8;
        if next == self.level {
            None
        } else {
            Some(Intent::ChangeLevel(next))
        }
    }
}
