//! # Showdown Equity
//!
//! Exact range-vs-range poker equity by exhaustive enumeration.
//!
//! ## Features
//!
//! - **Range Notation**: `AKs`, `TT+`, `A2s-A5s`, `KTo+`, explicit `AsKh`
//!   combinations and the `.` wildcard
//! - **Exact Enumeration**: every distribution pairing and every completion
//!   of the hands and board, with card-disjointness enforced
//! - **Pluggable Games**: win/tie rules live behind the `ShowdownEvaluator`
//!   trait; a Texas Hold'em evaluator ships with the crate
//! - **Parallel Shards**: optional rayon sharding of the outer loop with
//!   deterministic merging
//!
//! ## Quick Start
//!
//! ```
//! use showdown_equity::cards::CardSet;
//! use showdown_equity::equity::{EquitySummary, ShowdownEnumerator};
//! use showdown_equity::eval::HoldemEvaluator;
//!
//! let enumerator = ShowdownEnumerator::new();
//! let board = CardSet::from_str("Kc7s2d3c").unwrap();
//! let results = enumerator
//!     .calculate_equity_fuzz(&["AhAd", "KK"], &board, Some(&HoldemEvaluator::new()))
//!     .unwrap();
//!
//! let summary = EquitySummary::from_results(&results);
//! assert!(summary.players[1].equity > 0.9);
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: cards, card sets and the deck
//! - [`range`]: range notation parsing and hand distributions
//! - [`enumerate`]: the outer odometer and the inner deck partitions
//! - [`eval`]: showdown evaluators and equity accumulators
//! - [`equity`]: the enumerator itself
//!
//! ## Architecture
//!
//! ```text
//!   "AKs,TT+"  ──► range::parse_range ──► HandDistribution ─┐
//!                                                          │
//!   board ─────────────────────────────────────────────────┼──► ShowdownEnumerator
//!                                                          │      │ Odometer (outer)
//!   ShowdownEvaluator (e.g. HoldemEvaluator) ──────────────┘      │ PartitionEnumerator (inner)
//!                                                                 ▼
//!                                                         Vec<EquityResult>
//! ```

#![warn(missing_docs)]

/// Cards, card sets and the deck.
pub mod cards;

/// Outer and inner enumeration primitives.
pub mod enumerate;

/// Equity enumeration engine.
///
/// This is the core module: it combines distributions, board and evaluator
/// into per-player equity totals.
pub mod equity;

/// Showdown evaluation and result accumulators.
pub mod eval;

/// Range notation and hand distributions.
pub mod range;

// Re-export commonly used types at crate root for convenience
pub use cards::{Card, CardSet, Deck};
pub use equity::{
    EnumerationStats, EnumeratorConfig, EquityError, EquitySummary, ShowdownEnumerator,
};
pub use eval::{EquityResult, HoldemEvaluator, ShowdownEvaluator};
pub use range::{parse_range, HandDistribution, RangeError};
