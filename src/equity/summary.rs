//! Run statistics and normalized summaries.

use crate::eval::EquityResult;
use serde::{Deserialize, Serialize};

/// Counters collected during one calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumerationStats {
    /// Outer index tuples visited.
    pub outer_visited: u64,

    /// Outer tuples dropped because two partial hands shared a card.
    pub skipped: u64,

    /// Complete deals handed to the evaluator.
    pub deals: u64,

    /// Total time spent enumerating (in seconds).
    pub elapsed_seconds: f64,

    /// Deals per second.
    pub deals_per_second: f64,
}

impl EnumerationStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update deals per second based on elapsed time.
    pub fn update_rate(&mut self) {
        if self.elapsed_seconds > 0.0 {
            self.deals_per_second = self.deals as f64 / self.elapsed_seconds;
        }
    }

    /// Fold in the counters of another shard. Elapsed time is left alone.
    pub fn merge(&mut self, other: &EnumerationStats) {
        self.outer_visited += other.outer_visited;
        self.skipped += other.skipped;
        self.deals += other.deals;
    }
}

/// One player's share of the pot as fractions of the enumerated mass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    /// Fraction of mass won outright.
    pub win: f64,
    /// Fraction of mass collected from split pots.
    pub tie: f64,
    /// `win + tie`.
    pub equity: f64,
}

/// Normalized view of a result vector.
///
/// The raw accumulators are weighted counts. Every deal distributes exactly
/// its weight across the players, so `Σ equity` is the total enumerated
/// mass and dividing by it yields fractions that sum to one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquitySummary {
    /// Per-player fractions, in player order.
    pub players: Vec<PlayerSummary>,
    /// Total enumerated mass.
    pub total: f64,
}

impl EquitySummary {
    /// Normalize raw results. With zero total mass every fraction is zero.
    pub fn from_results(results: &[EquityResult]) -> Self {
        let total: f64 = results.iter().map(|r| r.equity).sum();
        let scale = if total > 0.0 { 1.0 / total } else { 0.0 };
        let players = results
            .iter()
            .map(|r| PlayerSummary {
                win: r.win_shares * scale,
                tie: r.tie_shares * scale,
                equity: r.equity * scale,
            })
            .collect();
        Self { players, total }
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if the summary covers no players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
