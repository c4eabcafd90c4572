//! Texas Hold'em showdowns.

use super::evaluator::ShowdownEvaluator;
use super::hand_eval::{HandEvaluator, HandRank};
use super::result::EquityResult;
use crate::cards::CardSet;

/// Most players a 52-card deck can seat with a five-card board.
pub const MAX_PLAYERS: usize = 23;

/// Hold'em: two hole cards, five board cards, best five of seven wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldemEvaluator {
    evaluator: HandEvaluator,
}

impl HoldemEvaluator {
    /// Create a new Hold'em evaluator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShowdownEvaluator for HoldemEvaluator {
    fn hand_size(&self) -> usize {
        2
    }

    fn board_size(&self) -> usize {
        5
    }

    fn evaluate_showdown(
        &self,
        hands: &[CardSet],
        board: &CardSet,
        results: &mut [EquityResult],
        weight: f64,
    ) {
        debug_assert!(hands.len() <= MAX_PLAYERS);
        debug_assert_eq!(hands.len(), results.len());

        let mut ranks = [HandRank::default(); MAX_PLAYERS];
        let mut best = HandRank::default();
        for (rank, hand) in ranks.iter_mut().zip(hands) {
            *rank = self.evaluator.evaluate(*hand | *board);
            best = best.max(*rank);
        }

        let ranks = &ranks[..hands.len()];
        let winners = ranks.iter().filter(|&&r| r == best).count();
        if winners == 1 {
            for (result, &rank) in results.iter_mut().zip(ranks) {
                if rank == best {
                    result.add_win(weight);
                }
            }
        } else {
            let share = weight / winners as f64;
            for (result, &rank) in results.iter_mut().zip(ranks) {
                if rank == best {
                    result.add_tie(share);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> CardSet {
        CardSet::from_str(s).unwrap()
    }

    #[test]
    fn test_outright_win() {
        let eval = HoldemEvaluator::new();
        let hands = [cards("AhAd"), cards("KhKd")];
        let mut results = vec![EquityResult::new(); 2];
        eval.evaluate_showdown(&hands, &cards("Qs Jc 7d 3s 2h"), &mut results, 2.0);
        assert_eq!(results[0].win_shares, 2.0);
        assert_eq!(results[0].equity, 2.0);
        assert_eq!(results[1].equity, 0.0);
    }

    #[test]
    fn test_three_way_split() {
        let eval = HoldemEvaluator::new();
        // Broadway on board plays for everyone.
        let board = cards("As Kd Qh Jc Ts");
        let hands = [cards("2c3c"), cards("4d5d"), cards("6h7h")];
        let mut results = vec![EquityResult::new(); 3];
        eval.evaluate_showdown(&hands, &board, &mut results, 1.5);
        for r in &results {
            assert_eq!(r.win_shares, 0.0);
            assert!((r.tie_shares - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_partial_split() {
        let eval = HoldemEvaluator::new();
        let board = cards("Ks 9d 7h 4c 2s");
        let hands = [cards("KhAd"), cards("KdAc"), cards("QhQd")];
        let mut results = vec![EquityResult::new(); 3];
        eval.evaluate_showdown(&hands, &board, &mut results, 1.0);
        assert_eq!(results[0].tie_shares, 0.5);
        assert_eq!(results[1].tie_shares, 0.5);
        assert_eq!(results[2].equity, 0.0);
    }
}
