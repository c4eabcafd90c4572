//! Deck bookkeeping for enumeration.
//!
//! The deck keeps the live cards packed at the front of a fixed array in id
//! order, so a bitmask over positions `0..len()` selects a subset of the
//! remaining cards. `peek` turns such a position mask back into a `CardSet`.

use super::card::{Card, DECK_SIZE};
use super::cardset::CardSet;
use std::fmt;

/// A deck of 52 playing cards with dead cards removed.
#[derive(Clone)]
pub struct Deck {
    /// Live cards in ascending id order, packed at the front.
    cards: [Card; DECK_SIZE],
    /// Number of live cards.
    len: usize,
    /// Cards removed from the deck.
    dead: CardSet,
}

impl Deck {
    /// Create a full deck in standard order.
    pub fn new() -> Self {
        let mut cards = [Card::from_id(0); DECK_SIZE];
        for (i, card) in cards.iter_mut().enumerate() {
            *card = Card::from_id(i as u8);
        }
        Self {
            cards,
            len: DECK_SIZE,
            dead: CardSet::new(),
        }
    }

    /// Create a deck with the given cards removed.
    pub fn without(dead: CardSet) -> Self {
        let mut deck = Self::new();
        deck.remove(dead);
        deck
    }

    /// Restore all 52 cards.
    pub fn reset(&mut self) {
        for (i, card) in self.cards.iter_mut().enumerate() {
            *card = Card::from_id(i as u8);
        }
        self.len = DECK_SIZE;
        self.dead = CardSet::new();
    }

    /// Remove a set of dead cards, keeping the rest packed in id order.
    pub fn remove(&mut self, dead: CardSet) {
        self.dead |= dead;
        let mut write = 0;
        for read in 0..self.len {
            let card = self.cards[read];
            if !dead.contains(card) {
                self.cards[write] = card;
                write += 1;
            }
        }
        self.len = write;
    }

    /// Number of live cards.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no cards remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cards removed so far.
    pub fn dead(&self) -> CardSet {
        self.dead
    }

    /// Live cards as a slice.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards[..self.len]
    }

    /// Select live cards by position mask (bit `i` = `remaining_cards()[i]`).
    #[inline]
    pub fn peek(&self, mask: u64) -> CardSet {
        debug_assert!(mask >> self.len == 0, "mask exceeds deck");
        let mut set = CardSet::new();
        let mut bits = mask;
        while bits != 0 {
            let pos = bits.trailing_zeros() as usize;
            set.insert(self.cards[pos]);
            bits &= bits - 1;
        }
        set
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} remaining)", self.len)
    }
}
