//! The showdown evaluator interface.
//!
//! The enumerator only deals cards; deciding who wins a fully dealt hand and
//! how to credit it belongs to a `ShowdownEvaluator`.

use super::result::EquityResult;
use crate::cards::CardSet;

/// Trait for game variants that can settle a complete deal.
///
/// # Example
/// ```
/// use showdown_equity::cards::CardSet;
/// use showdown_equity::eval::{EquityResult, ShowdownEvaluator};
///
/// /// Every deal is a split pot.
/// struct AlwaysChop;
///
/// impl ShowdownEvaluator for AlwaysChop {
///     fn hand_size(&self) -> usize { 2 }
///     fn board_size(&self) -> usize { 0 }
///     fn evaluate_showdown(
///         &self,
///         hands: &[CardSet],
///         _board: &CardSet,
///         results: &mut [EquityResult],
///         weight: f64,
///     ) {
///         let share = weight / hands.len() as f64;
///         for r in results.iter_mut() {
///             r.add_tie(share);
///         }
///     }
/// }
/// ```
pub trait ShowdownEvaluator: Send + Sync {
    /// Number of private cards each player holds at showdown.
    fn hand_size(&self) -> usize;

    /// Number of community cards at showdown (0 for board-less games).
    fn board_size(&self) -> usize;

    /// Settle one complete deal.
    ///
    /// `hands[i]` is player `i`'s complete hand, `board` the complete board.
    /// Credits `weight` to `results` (one entry per player).
    fn evaluate_showdown(
        &self,
        hands: &[CardSet],
        board: &CardSet,
        results: &mut [EquityResult],
        weight: f64,
    );
}
