//! Game state module - the memory game state machine
//!
//! All session state lives in [`GameState`] and changes only through the named
//! transitions below: [`start_stop`](GameState::start_stop),
//! [`reset`](GameState::reset), [`select_card`](GameState::select_card),
//! [`tick`](GameState::tick) and [`set_level`](GameState::set_level).
//!
//! Ordering inside a transition is fixed:
//!
//! - `tick`: countdown step → possible time-out → pending flip clear
//! - `select_card`: flip → (second card) match check → win check → schedule clear

use std::collections::BTreeSet;

use arrayvec::ArrayVec;
use log::{debug, info};
use serde::Serialize;

use crate::board::{Board, Card};
use crate::config::GameConfig;
use crate::error::{validate_level, ConfigError};
use crate::rng::DeckRng;
use crate::snapshot::GameSnapshot;
use crate::timers::{PendingClear, SecondTimer};
use crate::types::{GameAction, SESSION_SECONDS};

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameOutcome {
    Won,
    TimeExpired,
}

impl GameOutcome {
    pub fn message(self) -> &'static str {
        match self {
            GameOutcome::Won => "Congratulations! You matched all cards!",
            GameOutcome::TimeExpired => "Time's up! Game over!",
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: DeckRng,
    remaining_seconds: u32,
    active: bool,
    game_over: bool,
    /// Face-up cards waiting for the pair to resolve.
    flipped: ArrayVec<usize, 2>,
    /// Cards whose pair has been found; only shrinks on a session reset.
    matched: BTreeSet<usize>,
    countdown: SecondTimer,
    pending_clear: Option<PendingClear>,
    /// Bumped for every completed pair and every session reset.
    ///
    /// A pending clear only applies while its generation is current.
    generation: u32,
}

impl GameState {
    /// Deal a board for `config.level` and enter the idle state.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = DeckRng::new(config.seed);
        let board = Board::generate(config.level, &mut rng)?;
        Ok(Self::from_parts(board, rng))
    }

    /// Idle game on a fixed board.
    pub fn with_board(board: Board) -> Self {
        Self::from_parts(board, DeckRng::default())
    }

    fn from_parts(board: Board, rng: DeckRng) -> Self {
        Self {
            board,
            rng,
            remaining_seconds: SESSION_SECONDS,
            active: false,
            game_over: false,
            flipped: ArrayVec::new(),
            matched: BTreeSet::new(),
            countdown: SecondTimer::new(),
            pending_clear: None,
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn level(&self) -> u8 {
        self.board.level()
    }

    pub fn card(&self, position: usize) -> Option<Card> {
        self.board.get(position)
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    pub fn matched(&self) -> &BTreeSet<usize> {
        &self.matched
    }

    pub fn pending_clear(&self) -> Option<&PendingClear> {
        self.pending_clear.as_ref()
    }

    /// Every card matched.
    pub fn all_matched(&self) -> bool {
        !self.board.is_empty() && self.matched.len() == self.board.len()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.game_over {
            return None;
        }
        if self.all_matched() {
            Some(GameOutcome::Won)
        } else if self.remaining_seconds == 0 {
            Some(GameOutcome::TimeExpired)
        } else {
            None
        }
    }

    /// Toggle the session.
    ///
    /// Activating always starts a fresh session (clock back to full, flips and
    /// matches cleared), even when coming out of a pause. Deactivating only
    /// freezes the clock.
    pub fn start_stop(&mut self) -> bool {
        if self.active {
            self.active = false;
            self.countdown.cancel();
            info!("session paused with {}s left", self.remaining_seconds);
        } else {
            self.reset_session();
            self.active = true;
            info!(
                "session started: level {} ({} pairs), {}s",
                self.board.level(),
                self.board.pair_count(),
                self.remaining_seconds
            );
        }
        true
    }

    /// Return to the idle state. The board is kept as dealt.
    pub fn reset(&mut self) -> bool {
        self.reset_session();
        info!("session reset");
        true
    }

    /// Flip the card at `position`.
    ///
    /// Returns false when the selection is ignored: two cards are already face
    /// up, the card is matched or already face up, the position is off the
    /// board, or the session is not running.
    pub fn select_card(&mut self, position: usize) -> bool {
        if self.flipped.is_full() || self.matched.contains(&position) {
            return false;
        }
        if !self.active {
            return false;
        }
        if position >= self.board.len() || self.flipped.contains(&position) {
            return false;
        }

        self.flipped.push(position);
        debug!("flipped position {}", position);

        if self.flipped.is_full() {
            self.resolve_pair();
        }
        true
    }

    /// Advance time by `elapsed_ms`.
    ///
    /// Returns true if anything observable changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let mut changed = false;

        if self.active && self.remaining_seconds > 0 {
            let seconds = self.countdown.advance(elapsed_ms);
            if seconds > 0 {
                self.remaining_seconds = self.remaining_seconds.saturating_sub(seconds);
                changed = true;
                if self.remaining_seconds == 0 {
                    self.expire();
                }
            }
        }

        // The flip delay runs whether or not the clock does: a pair flipped
        // just before a pause or a win still turns back.
        if let Some(mut pending) = self.pending_clear.take() {
            if pending.advance(elapsed_ms) {
                changed |= self.apply_clear(pending);
            } else {
                self.pending_clear = Some(pending);
            }
        }

        changed
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::StartStop => self.start_stop(),
            GameAction::Reset => self.reset(),
            GameAction::SelectCard(position) => self.select_card(position),
        }
    }

    /// Deal a new board for `level` and return to idle.
    ///
    /// Asking for the current level keeps the board as it is.
    pub fn set_level(&mut self, level: u8) -> Result<(), ConfigError> {
        let level = validate_level(level)?;
        if level == self.board.level() {
            return Ok(());
        }
        let board = Board::generate(level, &mut self.rng)?;
        self.replace_board(board);
        Ok(())
    }

    /// Swap in a board and return to idle.
    pub fn replace_board(&mut self, board: Board) {
        info!(
            "new board: level {} ({} cards)",
            board.level(),
            board.len()
        );
        self.board = board;
        self.reset_session();
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.level = self.board.level();
        out.remaining_seconds = self.remaining_seconds;
        out.is_active = self.active;
        out.is_game_over = self.game_over;
        out.outcome = self.outcome();
        out.board.clear();
        out.board.extend_from_slice(self.board.cards());
        out.flipped_positions.clone_from(&self.flipped);
        out.matched_positions.clone_from(&self.matched);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    fn reset_session(&mut self) {
        self.remaining_seconds = SESSION_SECONDS;
        self.active = false;
        self.game_over = false;
        self.flipped.clear();
        self.matched.clear();
        self.countdown.cancel();
        self.pending_clear = None;
        self.generation = self.generation.wrapping_add(1);
    }

    fn resolve_pair(&mut self) {
        let pair = [self.flipped[0], self.flipped[1]];

        if self.board.is_pair(pair[0], pair[1]) {
            self.matched.insert(pair[0]);
            self.matched.insert(pair[1]);
            debug!(
                "matched positions {} and {} ({}/{} cards)",
                pair[0],
                pair[1],
                self.matched.len(),
                self.board.len()
            );
            self.check_win();
        } else {
            debug!("mismatch at positions {} and {}", pair[0], pair[1]);
        }

        self.generation = self.generation.wrapping_add(1);
        self.pending_clear = Some(PendingClear::new(pair, self.generation));
    }

    fn check_win(&mut self) {
        if self.all_matched() {
            self.active = false;
            self.game_over = true;
            self.countdown.cancel();
            info!("all pairs found with {}s left", self.remaining_seconds);
        }
    }

    fn expire(&mut self) {
        self.active = false;
        self.game_over = true;
        self.countdown.cancel();
        info!("time expired with {}/{} cards matched", self.matched.len(), self.board.len());
    }

    fn apply_clear(&mut self, pending: PendingClear) -> bool {
        if pending.generation() != self.generation || self.flipped.as_slice() != &pending.pair()[..] {
            debug!("dropping stale flip clear for {:?}", pending.pair());
            return false;
        }
        self.flipped.clear();
        debug!("cleared flipped pair {:?}", pending.pair());
        true
    }

    #[cfg(test)]
    fn set_remaining_seconds(&mut self, seconds: u32) {
        self.remaining_seconds = seconds;
    }
}
