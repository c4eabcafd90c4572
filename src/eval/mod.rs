//! Showdown evaluation.
//!
//! - `evaluator`: the `ShowdownEvaluator` trait the enumerator calls
//! - `result`: `EquityResult`, the per-player accumulator
//! - `hand_eval`: best-five-card hand ranking
//! - `holdem`: `HoldemEvaluator`, a ready-made Texas Hold'em evaluator

pub mod evaluator;
pub mod hand_eval;
pub mod holdem;
pub mod result;

pub use evaluator::ShowdownEvaluator;
pub use hand_eval::{HandCategory, HandEvaluator, HandRank};
pub use holdem::{HoldemEvaluator, MAX_PLAYERS};
pub use result::EquityResult;
