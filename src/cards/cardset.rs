//! Bitmask card sets.
//!
//! A `CardSet` is a `u64` with one bit per card id, so union, membership and
//! disjointness are single integer operations. The canonical text form lists
//! cards by rank descending, then suit descending (`AsKh`, `QhQd`); the empty
//! set prints as `.`, the wildcard.

use super::card::{Card, DECK_SIZE};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Mask with every card of the deck set.
pub const FULL_DECK_MASK: u64 = (1u64 << DECK_SIZE) - 1;

/// An unordered set of distinct cards.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CardSet {
    mask: u64,
}

impl CardSet {
    /// Create an empty card set.
    #[inline]
    pub const fn new() -> Self {
        Self { mask: 0 }
    }

    /// Create a set from a raw mask. Bits above the deck are dropped.
    #[inline]
    pub const fn from_mask(mask: u64) -> Self {
        Self {
            mask: mask & FULL_DECK_MASK,
        }
    }

    /// Create a set holding a single card.
    #[inline]
    pub fn from_card(card: Card) -> Self {
        Self { mask: card.mask() }
    }

    /// Parse concatenated cards like "AsKh" or "Ah Kd Qc".
    ///
    /// Returns `None` on a malformed card or a repeated card. An empty
    /// string (or `.`) is the empty set.
    pub fn from_str(s: &str) -> Option<Self> {
        let s: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if s == "." {
            return Some(Self::new());
        }
        if !s.is_ascii() || s.len() % 2 != 0 {
            return None;
        }

        let mut set = Self::new();
        for i in (0..s.len()).step_by(2) {
            let card = Card::from_str(&s[i..i + 2])?;
            if !set.insert(card) {
                return None;
            }
        }
        Some(set)
    }

    /// Raw bitmask.
    #[inline]
    pub const fn mask(&self) -> u64 {
        self.mask
    }

    /// Number of cards in the set.
    #[inline]
    pub const fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Check if the set is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Check if a card is in the set.
    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.mask & card.mask() != 0
    }

    /// Insert a card. Returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, card: Card) -> bool {
        let had = self.contains(card);
        self.mask |= card.mask();
        !had
    }

    /// Remove every card.
    #[inline]
    pub fn clear(&mut self) {
        self.mask = 0;
    }

    /// True if the two sets share no card.
    #[inline]
    pub const fn is_disjoint(&self, other: &CardSet) -> bool {
        self.mask & other.mask == 0
    }

    /// Iterate cards in ascending id order.
    pub fn iter(&self) -> Cards {
        Cards { mask: self.mask }
    }

    /// Cards as a vector, highest first.
    pub fn cards(&self) -> Vec<Card> {
        self.iter().rev().collect()
    }
}

/// Iterator over the cards of a `CardSet`, lowest id first.
#[derive(Debug, Clone)]
pub struct Cards {
    mask: u64,
}

impl Iterator for Cards {
    type Item = Card;

    #[inline]
    fn next(&mut self) -> Option<Card> {
        if self.mask == 0 {
            return None;
        }
        let id = self.mask.trailing_zeros() as u8;
        self.mask &= self.mask - 1;
        Some(Card::from_id(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.mask.count_ones() as usize;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Cards {
    #[inline]
    fn next_back(&mut self) -> Option<Card> {
        if self.mask == 0 {
            return None;
        }
        let id = 63 - self.mask.leading_zeros() as u8;
        self.mask &= !(1u64 << id);
        Some(Card::from_id(id))
    }
}

impl ExactSizeIterator for Cards {}

impl BitOr for CardSet {
    type Output = CardSet;

    #[inline]
    fn bitor(self, rhs: CardSet) -> CardSet {
        CardSet {
            mask: self.mask | rhs.mask,
        }
    }
}

impl BitOrAssign for CardSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: CardSet) {
        self.mask |= rhs.mask;
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = CardSet::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, ".");
        }
        for card in self.iter().rev() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl fmt::Debug for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_canonical_form() {
        let set = CardSet::from_str("KhAs").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "AsKh");

        let set = CardSet::from_str("Qd Qh").unwrap();
        assert_eq!(set.to_string(), "QhQd");

        let board = CardSet::from_str("2c7dJhQsAc").unwrap();
        assert_eq!(board.to_string(), "AcQsJh7d2c");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(CardSet::from_str("AsAs").is_none());
        assert!(CardSet::from_str("AsK").is_none());
        assert!(CardSet::from_str("AKs+").is_none());
        assert!(CardSet::from_str("Xx").is_none());
    }

    #[test]
    fn test_empty_set_is_wildcard() {
        assert_eq!(CardSet::new().to_string(), ".");
        assert_eq!(CardSet::from_str(".").unwrap(), CardSet::new());
        assert_eq!(CardSet::from_str("").unwrap(), CardSet::new());
    }

    #[test]
    fn test_set_algebra() {
        let a = CardSet::from_str("AsKs").unwrap();
        let b = CardSet::from_str("QhJh").unwrap();
        let c = CardSet::from_str("KsQd").unwrap();

        assert!(a.is_disjoint(&b));
        assert!(!a.is_disjoint(&c));

        let mut u = a | b;
        assert_eq!(u.len(), 4);
        u |= c;
        assert_eq!(u.len(), 5);
        assert!(u.contains(Card::from_str("Qd").unwrap()));

        let mut s = CardSet::new();
        assert!(s.insert(Card::from_str("2c").unwrap()));
        assert!(!s.insert(Card::from_str("2c").unwrap()));
        s.clear();
        assert!(s.is_empty());
    }

    #[test]
    fn test_cards_highest_first() {
        let set = CardSet::from_str("2c Ah 9d").unwrap();
        let cards: Vec<String> = set.cards().iter().map(|c| c.to_string()).collect();
        assert_eq!(cards, vec!["Ah", "9d", "2c"]);
    }
}
