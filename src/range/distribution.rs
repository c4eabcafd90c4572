//! Weighted hand distributions.

use super::parser::{parse_range, WILDCARD};
use crate::cards::CardSet;
use rustc_hash::FxHashMap;
use std::fmt;

/// A player's possible holdings with their relative weights.
///
/// Entries are unique by card set and keep insertion order. The wildcard
/// distribution holds one entry, the empty set, which the enumerator fills
/// from the deck.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandDistribution {
    entries: Vec<(CardSet, f64)>,
}

impl HandDistribution {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// The "any hand" distribution.
    pub fn wildcard() -> Self {
        Self {
            entries: vec![(CardSet::new(), 1.0)],
        }
    }

    /// Build from explicit weighted hands. A repeated hand keeps its first
    /// position and takes the later weight.
    pub fn from_weighted<I>(hands: I) -> Result<Self, RangeError>
    where
        I: IntoIterator<Item = (CardSet, f64)>,
    {
        let mut entries: Vec<(CardSet, f64)> = Vec::new();
        let mut index: FxHashMap<CardSet, usize> = FxHashMap::default();
        for (hand, weight) in hands {
            if !weight.is_finite() || weight < 0.0 {
                return Err(RangeError::InvalidWeight(weight));
            }
            match index.get(&hand) {
                Some(&i) => entries[i].1 = weight,
                None => {
                    index.insert(hand, entries.len());
                    entries.push((hand, weight));
                }
            }
        }
        Ok(Self { entries })
    }

    /// Parse a comma-separated list of concrete hands (or `.`), each with
    /// weight 1.0.
    ///
    /// This is the normalized form produced by [`parse_range`]; shorthand
    /// such as `AKs` is rejected here. Use [`HandDistribution::from_range`]
    /// for range notation.
    pub fn parse(text: &str) -> Result<Self, RangeError> {
        let text = text.trim();
        if text == WILDCARD {
            return Ok(Self::wildcard());
        }
        let mut hands = Vec::new();
        for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let hand = CardSet::from_str(token)
                .ok_or_else(|| RangeError::InvalidCards(token.to_string()))?;
            hands.push((hand, 1.0));
        }
        Self::from_weighted(hands)
    }

    /// Expand range notation and build a uniform distribution from it.
    pub fn from_range(range: &str) -> Result<Self, RangeError> {
        Self::parse(&parse_range(range))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the distribution has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hand at an index.
    #[inline]
    pub fn hand(&self, i: usize) -> CardSet {
        self.entries[i].0
    }

    /// Weight at an index.
    #[inline]
    pub fn weight(&self, i: usize) -> f64 {
        self.entries[i].1
    }

    /// Weight of a specific hand, if present.
    pub fn weight_of(&self, hand: &CardSet) -> Option<f64> {
        self.entries.iter().find(|(h, _)| h == hand).map(|&(_, w)| w)
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w).sum()
    }

    /// Largest hand size among the entries.
    pub fn max_hand_size(&self) -> usize {
        self.entries.iter().map(|(h, _)| h.len()).max().unwrap_or(0)
    }

    /// Iterate `(hand, weight)` entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &(CardSet, f64)> {
        self.entries.iter()
    }
}

impl fmt::Display for HandDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (hand, _)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", hand)?;
        }
        Ok(())
    }
}

/// Error type for building distributions.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeError {
    /// A token is not a valid list of distinct cards.
    InvalidCards(String),
    /// A weight is negative or not finite.
    InvalidWeight(f64),
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCards(s) => write!(f, "Invalid hand: {}", s),
            Self::InvalidWeight(w) => write!(f, "Invalid hand weight: {}", w),
        }
    }
}

impl std::error::Error for RangeError {}
