//! Millisecond accumulators for the engine's two delays.
//!
//! The engine has no clock; [`GameState::tick`](crate::GameState::tick) feeds
//! elapsed milliseconds into these. Cancelling a delay is dropping (or zeroing)
//! it, so nothing scheduled can outlive the state it was scheduled for.

use crate::types::{FLIP_RESOLVE_MS, SECOND_MS};

/// Countdown step timer: turns elapsed milliseconds into whole seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SecondTimer {
    elapsed_ms: u32,
}

impl SecondTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add elapsed time and return how many full seconds completed.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.elapsed_ms.saturating_add(elapsed_ms);
        self.elapsed_ms = total % SECOND_MS;
        total / SECOND_MS
    }

    /// Drop the partial second.
    pub fn cancel(&mut self) {
        self.elapsed_ms = 0;
    }

    /// Milliseconds accumulated towards the next second
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }
}

/// Scheduled clear of a flipped pair.
///
/// Carries the pair it was scheduled for and the generation of that pair, so
/// the engine can check on firing that it still refers to the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingClear {
    pair: [usize; 2],
    generation: u32,
    remaining_ms: u32,
}

impl PendingClear {
    pub fn new(pair: [usize; 2], generation: u32) -> Self {
        Self {
            pair,
            generation,
            remaining_ms: FLIP_RESOLVE_MS,
        }
    }

    /// Count down; returns true once the delay has fully elapsed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        self.remaining_ms == 0
    }

    pub fn pair(&self) -> [usize; 2] {
        self.pair
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }
}
