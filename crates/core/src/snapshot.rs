use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::board::Card;
use crate::game_state::GameOutcome;
use crate::types::{DEFAULT_LEVEL, SESSION_SECONDS};

/// How a card should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardFace {
    Hidden,
    Flipped,
    Matched,
}

/// Read-only copy of the engine state handed to renderers and scripts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub level: u8,
    pub remaining_seconds: u32,
    pub is_active: bool,
    pub is_game_over: bool,
    pub outcome: Option<GameOutcome>,
    pub board: Vec<Card>,
    pub flipped_positions: ArrayVec<usize, 2>,
    pub matched_positions: BTreeSet<usize>,
}

impl GameSnapshot {
    /// Face of the card at `position`. Flipped wins over matched.
    pub fn face(&self, position: usize) -> CardFace {
        if self.flipped_positions.contains(&position) {
            CardFace::Flipped
        } else if self.matched_positions.contains(&position) {
            CardFace::Matched
        } else {
            CardFace::Hidden
        }
    }

    /// Selections can land: the clock is running and nothing has ended.
    pub fn playable(&self) -> bool {
        self.is_active && !self.is_game_over
    }

    /// Stable hash of everything visible, used to skip redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            remaining_seconds: SESSION_SECONDS,
            is_active: false,
            is_game_over: false,
            outcome: None,
            board: Vec::new(),
            flipped_positions: ArrayVec::new(),
            matched_positions: BTreeSet::new(),
        }
    }
}
