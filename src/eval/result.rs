//! Per-player equity accumulators.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Running showdown totals for one player.
///
/// All fields are weighted counts: a deal enumerated with outer weight `w`
/// adds `w` to a sole winner, and `w / k` to each of `k` tied winners.
/// Fractions come from dividing by the total mass, see
/// [`crate::equity::EquitySummary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EquityResult {
    /// Weight of deals won outright.
    pub win_shares: f64,
    /// Weight of pot shares from split pots.
    pub tie_shares: f64,
    /// `win_shares + tie_shares`.
    pub equity: f64,
}

impl EquityResult {
    /// Create a zeroed accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outright win.
    #[inline]
    pub fn add_win(&mut self, weight: f64) {
        self.win_shares += weight;
        self.equity += weight;
    }

    /// Record a share of a split pot.
    #[inline]
    pub fn add_tie(&mut self, share: f64) {
        self.tie_shares += share;
        self.equity += share;
    }
}

impl AddAssign for EquityResult {
    fn add_assign(&mut self, other: EquityResult) {
        self.win_shares += other.win_shares;
        self.tie_shares += other.tie_shares;
        self.equity += other.equity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate() {
        let mut r = EquityResult::new();
        r.add_win(2.0);
        r.add_tie(0.5);
        assert_eq!(r.win_shares, 2.0);
        assert_eq!(r.tie_shares, 0.5);
        assert_eq!(r.equity, 2.5);

        let mut total = EquityResult::new();
        total += r;
        total += r;
        assert_eq!(total.equity, 5.0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut r = EquityResult::new();
        r.add_win(1.0);
        let json = serde_json::to_string(&r).unwrap();
        let back: EquityResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
