//! Range tokens.
//!
//! One comma-separated piece of range notation is classified into a
//! [`RangeToken`] up front, and each variant has exactly one expansion rule.
//! Ranks are 0-12 (2-A) as in [`crate::cards::card`].
//!
//! | notation      | token                          | combos           |
//! |---------------|--------------------------------|------------------|
//! | `.`           | `Wildcard`                     | the empty set    |
//! | `AsKh`        | `Concrete`                     | 1                |
//! | `QQ`          | `Pair`                         | 6                |
//! | `AK`          | `NonPair`                      | 16               |
//! | `TT+`         | `PairLadder`                   | 6 per pair       |
//! | `AT+`         | `NonPairLadder`                | 16 per kicker    |
//! | `AKs`, `AKo`  | `SuitedExact`                  | 4 / 12           |
//! | `ATs+`        | `SuitedLadder`                 | 4 / 12 per rank  |
//! | `A2-A5`       | `RangeBetween`                 | 16 per kicker    |
//! | `A2s-A5s`     | `SuitedRangeBetween`           | 4 / 12 per rank  |

use crate::cards::{parse_rank, Card, CardSet, NUM_SUITS, RANK_A};
use rustc_hash::FxHashSet;

/// Suit restriction on a rank pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suitedness {
    /// Every suit pairing.
    Any,
    /// Both cards share a suit (`s`).
    Suited,
    /// The cards have different suits (`o`).
    Offsuit,
}

impl Suitedness {
    /// Parse an `s`/`o` marker.
    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            's' => Some(Suitedness::Suited),
            'o' => Some(Suitedness::Offsuit),
            _ => None,
        }
    }

    /// Whether a pairing of suits `a` and `b` is allowed.
    #[inline]
    pub fn allows(self, a: u8, b: u8) -> bool {
        match self {
            Suitedness::Any => true,
            Suitedness::Suited => a == b,
            Suitedness::Offsuit => a != b,
        }
    }
}

/// A classified range token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeToken {
    /// `.`: any two cards.
    Wildcard,
    /// Two explicit cards, e.g. `AsKh`.
    Concrete(CardSet),
    /// A pocket pair, e.g. `QQ`.
    Pair(u8),
    /// Two different ranks in every suit pairing, e.g. `AK`.
    NonPair {
        /// First rank as written.
        first: u8,
        /// Second rank as written.
        second: u8,
    },
    /// `TT+`: the pair and every pair above it.
    PairLadder(u8),
    /// `AT+`: `high` with every kicker from `low` up to one below `high`.
    NonPairLadder {
        /// Fixed top rank.
        high: u8,
        /// Lowest kicker.
        low: u8,
    },
    /// `AKs`, `AKo`, `QQo`: an exact rank pair with a suit restriction.
    SuitedExact {
        /// First rank as written.
        first: u8,
        /// Second rank as written.
        second: u8,
        /// Suit restriction.
        suits: Suitedness,
    },
    /// `ATs+`, `TTo+`: a ladder with a suit restriction.
    SuitedLadder {
        /// First rank as written.
        first: u8,
        /// Second rank as written.
        second: u8,
        /// Suit restriction.
        suits: Suitedness,
    },
    /// `A2-A5`, `22-55`: every rank pair between two anchors.
    RangeBetween {
        /// Shared top rank of a non-pair range, `None` for a pair range.
        high: Option<u8>,
        /// Lower endpoint.
        from: u8,
        /// Upper endpoint.
        to: u8,
    },
    /// `A2s-A5s`: a range between two anchors with a suit restriction.
    SuitedRangeBetween {
        /// Shared top rank of a non-pair range, `None` for a pair range.
        high: Option<u8>,
        /// Lower endpoint.
        from: u8,
        /// Upper endpoint.
        to: u8,
        /// Suit restriction.
        suits: Suitedness,
    },
    /// Anything that does not fit the grammar.
    Invalid,
}

impl RangeToken {
    /// Classify one token. Never fails: malformed input is `Invalid`.
    pub fn parse(token: &str) -> RangeToken {
        if token == "." {
            return RangeToken::Wildcard;
        }

        let chars: Vec<char> = token.chars().collect();

        // Explicit cards win over shorthand.
        if chars.len() == 4 {
            if let Some(cards) = CardSet::from_str(token) {
                if cards.len() == 2 {
                    return RangeToken::Concrete(cards);
                }
            }
        }

        if chars.len() < 2 {
            return RangeToken::Invalid;
        }
        let (r1, r2) = match (parse_rank(chars[0]), parse_rank(chars[1])) {
            (Some(r1), Some(r2)) => (r1, r2),
            _ => return RangeToken::Invalid,
        };
        let pair = r1 == r2;

        match &chars[2..] {
            [] if pair => RangeToken::Pair(r1),
            [] => RangeToken::NonPair { first: r1, second: r2 },
            ['+'] if pair => RangeToken::PairLadder(r1),
            ['+'] => RangeToken::NonPairLadder { high: r1, low: r2 },
            ['-', r3, r4] => match (parse_rank(*r3), parse_rank(*r4)) {
                (Some(r3), Some(r4)) => match span(r1, r2, r3, r4) {
                    Some((high, from, to)) => RangeToken::RangeBetween { high, from, to },
                    None => RangeToken::Invalid,
                },
                _ => RangeToken::Invalid,
            },
            [m] => match Suitedness::from_marker(*m) {
                Some(suits) => RangeToken::SuitedExact { first: r1, second: r2, suits },
                None => RangeToken::Invalid,
            },
            [m, '+'] => match Suitedness::from_marker(*m) {
                Some(suits) => RangeToken::SuitedLadder { first: r1, second: r2, suits },
                None => RangeToken::Invalid,
            },
            [m, '-', r3, r4, m2] if m == m2 => {
                let suits = match Suitedness::from_marker(*m) {
                    Some(suits) => suits,
                    None => return RangeToken::Invalid,
                };
                match (parse_rank(*r3), parse_rank(*r4)) {
                    (Some(r3), Some(r4)) => match span(r1, r2, r3, r4) {
                        Some((high, from, to)) => {
                            RangeToken::SuitedRangeBetween { high, from, to, suits }
                        }
                        None => RangeToken::Invalid,
                    },
                    _ => RangeToken::Invalid,
                }
            }
            _ => RangeToken::Invalid,
        }
    }

    /// Expand into the set of concrete combinations the token denotes.
    ///
    /// `Wildcard` expands to the single empty set; `Invalid` to nothing.
    pub fn expand(&self) -> FxHashSet<CardSet> {
        let mut out = FxHashSet::default();
        match *self {
            RangeToken::Wildcard => {
                out.insert(CardSet::new());
            }
            RangeToken::Concrete(cards) => {
                out.insert(cards);
            }
            RangeToken::Pair(rank) => rank_pair(rank, rank, Suitedness::Any, &mut out),
            RangeToken::NonPair { first, second } => {
                rank_pair(first, second, Suitedness::Any, &mut out)
            }
            RangeToken::PairLadder(rank) => pair_ladder(rank, Suitedness::Any, &mut out),
            RangeToken::NonPairLadder { high, low } => {
                kicker_ladder(high, low, Suitedness::Any, &mut out)
            }
            RangeToken::SuitedExact { first, second, suits } => {
                rank_pair(first, second, suits, &mut out)
            }
            RangeToken::SuitedLadder { first, second, suits } if first == second => {
                pair_ladder(first, suits, &mut out)
            }
            RangeToken::SuitedLadder { first, second, suits } => {
                kicker_ladder(first, second, suits, &mut out)
            }
            RangeToken::RangeBetween { high, from, to } => {
                between(high, from, to, Suitedness::Any, &mut out)
            }
            RangeToken::SuitedRangeBetween { high, from, to, suits } => {
                between(high, from, to, suits, &mut out)
            }
            RangeToken::Invalid => {}
        }
        out
    }
}

/// Validate two range anchors and order their low endpoints.
///
/// Both anchors must be pairs, or both non-pairs with the same first rank.
fn span(r1: u8, r2: u8, r3: u8, r4: u8) -> Option<(Option<u8>, u8, u8)> {
    let pair = r1 == r2;
    if pair != (r3 == r4) || (!pair && r1 != r3) {
        return None;
    }
    let high = if pair { None } else { Some(r1) };
    Some((high, r2.min(r4), r2.max(r4)))
}

/// Every card pairing of ranks `a` and `b` allowed by `suits`.
fn rank_pair(a: u8, b: u8, suits: Suitedness, out: &mut FxHashSet<CardSet>) {
    for i in 0..NUM_SUITS {
        for j in 0..NUM_SUITS {
            if (a == b && i == j) || !suits.allows(i, j) {
                continue;
            }
            out.insert(CardSet::from_card(Card::new(a, i)) | CardSet::from_card(Card::new(b, j)));
        }
    }
}

fn pair_ladder(rank: u8, suits: Suitedness, out: &mut FxHashSet<CardSet>) {
    for r in rank..=RANK_A {
        rank_pair(r, r, suits, out);
    }
}

fn kicker_ladder(high: u8, low: u8, suits: Suitedness, out: &mut FxHashSet<CardSet>) {
    for kicker in low..high {
        rank_pair(high, kicker, suits, out);
    }
}

fn between(high: Option<u8>, from: u8, to: u8, suits: Suitedness, out: &mut FxHashSet<CardSet>) {
    for r in from..=to {
        match high {
            None => rank_pair(r, r, suits, out),
            Some(h) if h != r => rank_pair(h, r, suits, out),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::{RANK_2, RANK_5, RANK_K, RANK_T};

    #[test]
    fn test_classification() {
        assert_eq!(RangeToken::parse("."), RangeToken::Wildcard);
        assert_eq!(RangeToken::parse("TT"), RangeToken::Pair(RANK_T));
        assert_eq!(RangeToken::parse("TT+"), RangeToken::PairLadder(RANK_T));
        assert_eq!(
            RangeToken::parse("AK"),
            RangeToken::NonPair { first: RANK_A, second: RANK_K }
        );
        assert_eq!(
            RangeToken::parse("AKs"),
            RangeToken::SuitedExact { first: RANK_A, second: RANK_K, suits: Suitedness::Suited }
        );
        assert_eq!(
            RangeToken::parse("A5-A2"),
            RangeToken::RangeBetween { high: Some(RANK_A), from: RANK_2, to: RANK_5 }
        );
        assert!(matches!(RangeToken::parse("AsKh"), RangeToken::Concrete(_)));
    }

    #[test]
    fn test_malformed_tokens_are_invalid() {
        for token in ["", "A", "AX", "AKx", "AK+s", "AKs-", "A5-K2", "22-A5", "AKs-AQo", "AsAs", "AKss+"] {
            assert_eq!(RangeToken::parse(token), RangeToken::Invalid, "token {:?}", token);
        }
    }

    #[test]
    fn test_concrete_needs_two_distinct_cards() {
        // A repeated card falls back to shorthand, which rejects 's' as a rank.
        assert_eq!(RangeToken::parse("AsAs"), RangeToken::Invalid);
        // Four characters that are not two cards are shorthand.
        assert!(matches!(RangeToken::parse("AKs+"), RangeToken::SuitedLadder { .. }));
    }

    #[test]
    fn test_suitedness_filter() {
        assert!(Suitedness::Any.allows(0, 3));
        assert!(Suitedness::Suited.allows(2, 2));
        assert!(!Suitedness::Suited.allows(1, 2));
        assert!(Suitedness::Offsuit.allows(1, 2));
        assert!(!Suitedness::Offsuit.allows(0, 0));
    }

    #[test]
    fn test_expansion_sizes() {
        let size = |t: &str| RangeToken::parse(t).expand().len();
        assert_eq!(size("AA"), 6);
        assert_eq!(size("AK"), 16);
        assert_eq!(size("AKs"), 4);
        assert_eq!(size("AKo"), 12);
        assert_eq!(size("AAo"), 6);
        assert_eq!(size("AAs"), 0);
        assert_eq!(size("TT+"), 30);
        assert_eq!(size("AT+"), 64);
        assert_eq!(size("AQs+"), 8);
        assert_eq!(size("KTo+"), 36);
        assert_eq!(size("JJs+"), 0);
        assert_eq!(size("QQo+"), 18);
        assert_eq!(size("A2s-A5s"), 16);
        assert_eq!(size("A5o-A2o"), 48);
        assert_eq!(size("22-44"), 18);
        assert_eq!(size("K2-KK"), 0);
        assert_eq!(size("KA+"), 0);
        assert_eq!(size("."), 1);
    }

    #[test]
    fn test_suited_and_offsuit_shapes() {
        for combo in RangeToken::parse("AKs").expand() {
            let cards = combo.cards();
            assert_eq!(cards[0].suit(), cards[1].suit());
        }
        for combo in RangeToken::parse("AKo").expand() {
            let cards = combo.cards();
            assert_ne!(cards[0].suit(), cards[1].suit());
            assert_eq!(cards[0].rank(), RANK_A);
            assert_eq!(cards[1].rank(), RANK_K);
        }
    }

    #[test]
    fn test_range_between_skips_same_rank_kicker() {
        // K2-KK is a pairness mismatch; KQ-K2 ranges kickers 2..Q.
        let combos = RangeToken::parse("KQ-K2").expand();
        assert_eq!(combos.len(), 11 * 16);
        assert!(combos.iter().all(|c| c.len() == 2));
    }
}
