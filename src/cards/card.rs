//! Card representation.
//!
//! A `Card` is a rank (0-12: 2-A) and a suit (0-3: c, d, h, s) packed into
//! a single id `rank * 4 + suit`. Ordering by id is ordering by rank first,
//! then suit.

use std::fmt;

// Ranks (0-12: 2-A).
/// Deuce.
pub const RANK_2: u8 = 0;
/// Three.
pub const RANK_3: u8 = 1;
/// Four.
pub const RANK_4: u8 = 2;
/// Five.
pub const RANK_5: u8 = 3;
/// Six.
pub const RANK_6: u8 = 4;
/// Seven.
pub const RANK_7: u8 = 5;
/// Eight.
pub const RANK_8: u8 = 6;
/// Nine.
pub const RANK_9: u8 = 7;
/// Ten.
pub const RANK_T: u8 = 8;
/// Jack.
pub const RANK_J: u8 = 9;
/// Queen.
pub const RANK_Q: u8 = 10;
/// King.
pub const RANK_K: u8 = 11;
/// Ace.
pub const RANK_A: u8 = 12;

/// Number of distinct ranks.
pub const NUM_RANKS: u8 = 13;

// Suits (0-3).
/// Clubs.
pub const SUIT_CLUBS: u8 = 0;
/// Diamonds.
pub const SUIT_DIAMONDS: u8 = 1;
/// Hearts.
pub const SUIT_HEARTS: u8 = 2;
/// Spades.
pub const SUIT_SPADES: u8 = 3;

/// Number of distinct suits.
pub const NUM_SUITS: u8 = 4;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

const SUIT_CHARS: [char; 4] = ['c', 'd', 'h', 's'];

/// Parse a rank character (`2`-`9`, `T`, `J`, `Q`, `K`, `A`, any case).
pub fn parse_rank(c: char) -> Option<u8> {
    RANK_CHARS
        .iter()
        .position(|&r| r == c.to_ascii_uppercase())
        .map(|r| r as u8)
}

/// Parse a suit character (`c`, `d`, `h`, `s`, any case).
pub fn parse_suit(c: char) -> Option<u8> {
    SUIT_CHARS
        .iter()
        .position(|&s| s == c.to_ascii_lowercase())
        .map(|s| s as u8)
}

/// Display character for a rank.
pub fn rank_char(rank: u8) -> char {
    RANK_CHARS[rank as usize]
}

/// Display character for a suit.
pub fn suit_char(suit: u8) -> char {
    SUIT_CHARS[suit as usize]
}

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// Card index 0-51: rank * 4 + suit
    id: u8,
}

impl Card {
    /// Create a new card from rank (0-12) and suit (0-3).
    #[inline]
    pub fn new(rank: u8, suit: u8) -> Self {
        debug_assert!(rank < NUM_RANKS, "rank must be 0-12");
        debug_assert!(suit < NUM_SUITS, "suit must be 0-3");
        Self { id: rank * 4 + suit }
    }

    /// Create a card from its ID (0-51).
    #[inline]
    pub fn from_id(id: u8) -> Self {
        debug_assert!((id as usize) < DECK_SIZE, "card id must be 0-51");
        Self { id }
    }

    /// Parse a card from string like "As", "Kh", "2c".
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let rank = parse_rank(chars.next()?)?;
        let suit = parse_suit(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self::new(rank, suit))
    }

    /// Get the card's ID (0-51).
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Get the card's rank (0-12: 2-A).
    #[inline]
    pub fn rank(&self) -> u8 {
        self.id / 4
    }

    /// Get the card's suit (0-3).
    #[inline]
    pub fn suit(&self) -> u8 {
        self.id % 4
    }

    /// Single-bit mask of this card.
    #[inline]
    pub fn mask(&self) -> u64 {
        1u64 << self.id
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", rank_char(self.rank()), suit_char(self.suit()))
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let ace_spades = Card::new(RANK_A, SUIT_SPADES);
        assert_eq!(ace_spades.rank(), RANK_A);
        assert_eq!(ace_spades.suit(), SUIT_SPADES);
        assert_eq!(ace_spades.to_string(), "As");
        assert_eq!(ace_spades.id(), 51);

        let two_clubs = Card::new(RANK_2, SUIT_CLUBS);
        assert_eq!(two_clubs.id(), 0);
        assert_eq!(two_clubs.to_string(), "2c");
    }

    #[test]
    fn test_card_parsing() {
        assert_eq!(Card::from_str("As").unwrap().to_string(), "As");
        assert_eq!(Card::from_str("kh").unwrap().to_string(), "Kh");
        assert_eq!(Card::from_str("TD").unwrap().to_string(), "Td");
        assert!(Card::from_str("XX").is_none());
        assert!(Card::from_str("A").is_none());
        assert!(Card::from_str("AsK").is_none());
        assert!(Card::from_str("AK").is_none());
    }

    #[test]
    fn test_rank_and_suit_chars() {
        assert_eq!(parse_rank('t'), Some(RANK_T));
        assert_eq!(parse_rank('1'), None);
        assert_eq!(parse_suit('H'), Some(SUIT_HEARTS));
        assert_eq!(parse_suit('x'), None);
        assert_eq!(rank_char(RANK_Q), 'Q');
        assert_eq!(suit_char(SUIT_DIAMONDS), 'd');
    }

    #[test]
    fn test_ordering_is_rank_then_suit() {
        let kd = Card::from_str("Kd").unwrap();
        let ks = Card::from_str("Ks").unwrap();
        let ac = Card::from_str("Ac").unwrap();
        assert!(kd < ks);
        assert!(ks < ac);
    }
}
