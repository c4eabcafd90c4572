//! Poker hand ranking.
//!
//! Ranks the best five-card hand contained in a `CardSet` (normally 5-7
//! cards). The evaluator works on per-suit 13-bit rank masks: rank
//! multiplicities fall out of AND-ing the suit masks, and straights are runs
//! of five set bits.

use crate::cards::CardSet;
use std::cmp::Ordering;

const RANK_MASK: u16 = (1 << 13) - 1;

/// Hand rank categories, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No pair.
    HighCard = 0,
    /// One pair.
    OnePair = 1,
    /// Two pairs.
    TwoPair = 2,
    /// Three cards of one rank.
    ThreeOfAKind = 3,
    /// Five ranks in a row.
    Straight = 4,
    /// Five cards of one suit.
    Flush = 5,
    /// Trips plus a pair.
    FullHouse = 6,
    /// Four cards of one rank.
    FourOfAKind = 7,
    /// A straight in one suit.
    StraightFlush = 8,
}

/// A hand rank that can be compared.
/// Higher values are better hands.
/// Format: category (4 bits) | kicker1 (4 bits) | kicker2 (4 bits) | ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HandRank(u32);

impl HandRank {
    fn new(category: HandCategory, kickers: &[u8]) -> Self {
        let mut value = (category as u32) << 20;
        for (i, &k) in kickers.iter().take(5).enumerate() {
            value |= (k as u32) << (16 - i * 4);
        }
        Self(value)
    }

    /// Get the raw rank value for comparison.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Get the hand category.
    pub fn category(&self) -> HandCategory {
        match self.0 >> 20 {
            0 => HandCategory::HighCard,
            1 => HandCategory::OnePair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            _ => HandCategory::StraightFlush,
        }
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// Hand evaluator for poker hands.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandEvaluator;

impl HandEvaluator {
    /// Create a new hand evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Rank the best five-card hand in `cards`.
    pub fn evaluate(&self, cards: CardSet) -> HandRank {
        let mut suits = [0u16; 4];
        for card in cards.iter() {
            suits[card.suit() as usize] |= 1 << card.rank();
        }
        let [h0, h1, h2, h3] = suits;

        let ranks = h0 | h1 | h2 | h3;
        let ge2 = (h0 & h1) | (h0 & h2) | (h0 & h3) | (h1 & h2) | (h1 & h3) | (h2 & h3);
        let ge3 = (h0 & h1 & h2) | (h0 & h1 & h3) | (h0 & h2 & h3) | (h1 & h2 & h3);
        let ge4 = h0 & h1 & h2 & h3;

        let flush = suits.iter().copied().find(|s| s.count_ones() >= 5);

        if let Some(suit) = flush {
            if let Some(high) = straight_high(suit) {
                return HandRank::new(HandCategory::StraightFlush, &[high]);
            }
        }

        if ge4 != 0 {
            let quad = high_rank(ge4);
            let kicker = top_ranks(ranks & !bit(quad), 1);
            return HandRank::new(HandCategory::FourOfAKind, &[quad, kicker[0]]);
        }

        let trips = ge3;
        if trips != 0 {
            let trip = high_rank(trips);
            let rest = ge2 & !bit(trip);
            if rest != 0 {
                return HandRank::new(HandCategory::FullHouse, &[trip, high_rank(rest)]);
            }
        }

        if let Some(suit) = flush {
            return HandRank::new(HandCategory::Flush, &top_ranks(suit, 5));
        }

        if let Some(high) = straight_high(ranks) {
            return HandRank::new(HandCategory::Straight, &[high]);
        }

        if trips != 0 {
            let trip = high_rank(trips);
            let k = top_ranks(ranks & !bit(trip), 2);
            return HandRank::new(HandCategory::ThreeOfAKind, &[trip, k[0], k[1]]);
        }

        if ge2.count_ones() >= 2 {
            let p1 = high_rank(ge2);
            let p2 = high_rank(ge2 & !bit(p1));
            let k = top_ranks(ranks & !bit(p1) & !bit(p2), 1);
            return HandRank::new(HandCategory::TwoPair, &[p1, p2, k[0]]);
        }

        if ge2 != 0 {
            let pair = high_rank(ge2);
            let k = top_ranks(ranks & !bit(pair), 3);
            return HandRank::new(HandCategory::OnePair, &[pair, k[0], k[1], k[2]]);
        }

        HandRank::new(HandCategory::HighCard, &top_ranks(ranks, 5))
    }

    /// Compare two hands. Returns positive if hand1 wins, negative if hand2 wins, 0 for tie.
    pub fn compare(&self, hand1: CardSet, hand2: CardSet, board: CardSet) -> i32 {
        match self.evaluate(hand1 | board).cmp(&self.evaluate(hand2 | board)) {
            Ordering::Greater => 1,
            Ordering::Less => -1,
            Ordering::Equal => 0,
        }
    }
}

#[inline]
fn bit(rank: u8) -> u16 {
    1 << rank
}

/// Highest rank in a non-empty mask.
#[inline]
fn high_rank(mask: u16) -> u8 {
    debug_assert!(mask != 0);
    (15 - mask.leading_zeros()) as u8
}

/// Up to `n` highest ranks of a mask, highest first, zero-filled.
fn top_ranks(mut mask: u16, n: usize) -> [u8; 5] {
    let mut out = [0u8; 5];
    mask &= RANK_MASK;
    for slot in out.iter_mut().take(n) {
        if mask == 0 {
            break;
        }
        let r = high_rank(mask);
        *slot = r;
        mask &= !bit(r);
    }
    out
}

/// High card of the best straight in a rank mask, counting A-2-3-4-5.
fn straight_high(ranks: u16) -> Option<u8> {
    // Shift up one so the ace can also sit below the deuce at bit 0.
    let wide = (ranks << 1) | ((ranks >> 12) & 1);
    let run = wide & (wide >> 1) & (wide >> 2) & (wide >> 3) & (wide >> 4);
    if run == 0 {
        return None;
    }
    // Run bit j covers wide bits j..=j+4, whose top is rank j + 3.
    Some(high_rank(run) + 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> CardSet {
        CardSet::from_str(s).unwrap()
    }

    fn category(s: &str) -> HandCategory {
        HandEvaluator::new().evaluate(cards(s)).category()
    }

    #[test]
    fn test_categories() {
        assert_eq!(category("As Kd Qh Jc 9s"), HandCategory::HighCard);
        assert_eq!(category("As Ad Kh Qc Js"), HandCategory::OnePair);
        assert_eq!(category("As Ad Kh Kc Js"), HandCategory::TwoPair);
        assert_eq!(category("As Ad Ah Kc Js"), HandCategory::ThreeOfAKind);
        assert_eq!(category("Ts 9d 8h 7c 6s"), HandCategory::Straight);
        assert_eq!(category("As Ks 9s 7s 2s"), HandCategory::Flush);
        assert_eq!(category("As Ad Ah Kc Kd"), HandCategory::FullHouse);
        assert_eq!(category("As Ad Ah Ac Ks"), HandCategory::FourOfAKind);
        assert_eq!(category("9s 8s 7s 6s 5s"), HandCategory::StraightFlush);
    }

    #[test]
    fn test_straights() {
        assert_eq!(category("As Kd Qh Jc Ts"), HandCategory::Straight);
        assert_eq!(category("5s 4d 3h 2c As"), HandCategory::Straight);
        assert_eq!(straight_high(0b1_0000_0000_1111), Some(3));
        assert_eq!(straight_high(0b1_1111_0000_0000), Some(12));
        assert_eq!(straight_high(0b1_1110_0000_0001), None);
    }

    #[test]
    fn test_seven_card_best_hand() {
        // Quads on board plus a pair in hand.
        assert_eq!(category("Ah As Ad Ac Kh Qs Jd"), HandCategory::FourOfAKind);
        // Two trips make a full house.
        assert_eq!(category("Kh Ks Kd 7c 7h 7s 2d"), HandCategory::FullHouse);
        // Flush beats the straight also present.
        assert_eq!(category("9h 8h 7h 6h 2h Tc 5d"), HandCategory::Flush);
        // Steel wheel.
        assert_eq!(category("Ad 2d 3d 4d 5d Kc Kh"), HandCategory::StraightFlush);
    }

    #[test]
    fn test_kickers_decide() {
        let eval = HandEvaluator::new();
        let board = cards("Ks 9d 7h 4c 2s");
        // Pair of kings with ace kicker beats pair of kings with queen kicker.
        assert!(eval.compare(cards("KhAd"), cards("KdQc"), board) > 0);
        // Counterfeited two pair: board pair plays, best kicker wins.
        let paired = cards("8s 8d 5h 5c Ts");
        assert_eq!(eval.compare(cards("As3d"), cards("Ah2c"), paired), 0);
        assert!(eval.compare(cards("As3d"), cards("Qh2c"), paired) > 0);
    }

    #[test]
    fn test_hand_comparison() {
        let eval = HandEvaluator::new();
        let board = cards("Qs Jc 7d 3s 2h");
        assert!(eval.compare(cards("AhAd"), cards("KhKd"), board) > 0);
        assert!(eval.compare(cards("KhKd"), cards("AhAd"), board) < 0);
        assert_eq!(eval.compare(cards("Ah4c"), cards("Ad4d"), board), 0);
    }
}
