//! Card primitives.
//!
//! - `card`: `Card` plus rank/suit constants and character parsing
//! - `cardset`: `CardSet`, a 52-bit card bitmask
//! - `deck`: `Deck`, the live cards left after removing dead ones

pub mod card;
pub mod cardset;
pub mod deck;

pub use card::{parse_rank, parse_suit, Card, DECK_SIZE, NUM_RANKS, NUM_SUITS, RANK_A};
pub use cardset::{CardSet, Cards};
pub use deck::Deck;
