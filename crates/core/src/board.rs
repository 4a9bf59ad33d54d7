//! Board module - the dealt grid of cards
//!
//! A board of level `n` holds `n * n` cards laid out row by row. Every pair key
//! `1..=n*n/2` appears exactly twice, and card ids are the 1-based slot numbers.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{validate_level, ConfigError};
use crate::rng::DeckRng;
use crate::types::{card_count, pair_count};

/// A single card slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    /// 1-based slot number
    pub id: u32,
    /// Pair key shared with exactly one other card
    pub value: u32,
}

/// Square grid of cards, immutable once dealt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    level: u8,
    cards: Vec<Card>,
}

impl Board {
    /// Deal a fresh shuffled board for `level`.
    ///
    /// The level is validated before anything is allocated.
    pub fn generate(level: u8, rng: &mut DeckRng) -> Result<Self, ConfigError> {
        let level = validate_level(level)?;

        let mut values: Vec<u32> = (1..=pair_count(level) as u32)
            .flat_map(|v| [v, v])
            .collect();
        rng.shuffle(&mut values);

        Ok(Self::from_parts(level, values))
    }

    /// Build a board with a fixed layout, row by row.
    ///
    /// The number of values must be the square of an even side, and each value
    /// must appear exactly twice.
    pub fn from_values(values: &[u32]) -> Result<Self, ConfigError> {
        let side = integer_sqrt(values.len());
        if side == 0 || side * side != values.len() || side > u8::MAX as usize {
            return Err(ConfigError::NotSquare(values.len()));
        }
        let level = validate_level(side as u8).map_err(|_| ConfigError::NotSquare(values.len()))?;

        let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
        for &v in values {
            *counts.entry(v).or_insert(0) += 1;
        }
        if let Some((&value, &count)) = counts.iter().find(|(_, count)| **count != 2) {
            return Err(ConfigError::UnpairedValue { value, count });
        }

        Ok(Self::from_parts(level, values.to_vec()))
    }

    fn from_parts(level: u8, values: Vec<u32>) -> Self {
        debug_assert_eq!(values.len(), card_count(level));
        let cards = values
            .into_iter()
            .enumerate()
            .map(|(slot, value)| Card {
                id: slot as u32 + 1,
                value,
            })
            .collect();
        Self { level, cards }
    }

    /// Grid side length
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, position: usize) -> Option<Card> {
        self.cards.get(position).copied()
    }

    /// Check whether two positions hold the same pair key.
    ///
    /// Out-of-range positions never match.
    pub fn is_pair(&self, a: usize, b: usize) -> bool {
        match (self.get(a), self.get(b)) {
            (Some(x), Some(y)) => x.value == y.value,
            _ => false,
        }
    }
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
