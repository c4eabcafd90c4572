//! Range list expansion.
//!
//! A range string is a comma-separated list of tokens. Every token expands
//! on its own and the results are unioned by card-set identity. A wildcard
//! anywhere in the list absorbs everything else: the result is `.` alone.

use super::token::RangeToken;
use crate::cards::CardSet;
use log::debug;
use rustc_hash::FxHashSet;

/// Text form of the wildcard range.
pub const WILDCARD: &str = ".";

/// Expand a single token (no commas).
pub fn expand_token(token: &str) -> FxHashSet<CardSet> {
    RangeToken::parse(token).expand()
}

/// Expand a comma-separated range into its combinations.
///
/// The result is duplicate-free and sorted by canonical card text. If any
/// token is the wildcard the result is the single empty set.
pub fn expand_range(input: &str) -> Vec<CardSet> {
    let mut all: FxHashSet<CardSet> = FxHashSet::default();

    for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let parsed = RangeToken::parse(token);
        if parsed == RangeToken::Invalid {
            debug!("ignoring malformed range token {:?}", token);
            continue;
        }
        all.extend(parsed.expand());
    }

    if all.contains(&CardSet::new()) {
        return vec![CardSet::new()];
    }

    let mut keyed: Vec<(String, CardSet)> = all.into_iter().map(|c| (c.to_string(), c)).collect();
    keyed.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, c)| c).collect()
}

/// Normalize a range into a comma-joined list of concrete combinations.
///
/// ```
/// use showdown_equity::range::parse_range;
///
/// assert_eq!(parse_range("AKs"), "AcKc,AdKd,AhKh,AsKs");
/// assert_eq!(parse_range("QQ,."), ".");
/// ```
pub fn parse_range(input: &str) -> String {
    let output = expand_range(input)
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",");
    debug!("{}\n   ==> {}", input, output);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    #[test]
    fn test_pair_expansion() {
        let combos = expand_range("AA");
        assert_eq!(combos.len(), 6);
        for combo in &combos {
            let cards = combo.cards();
            assert_eq!(cards.len(), 2);
            assert_eq!(cards[0].rank(), cards[1].rank());
            assert_ne!(cards[0], cards[1]);
        }
    }

    #[test]
    fn test_unsuited_rank_pair_expansion() {
        let combos = expand_range("AK");
        assert_eq!(combos.len(), 16);
        let text = parse_range("AK");
        assert!(text.contains("AsKs"));
        assert!(text.contains("AcKh"));
        assert!(!text.contains("AA"));
    }

    #[test]
    fn test_wildcard_is_absorbing() {
        assert_eq!(parse_range("."), WILDCARD);
        assert_eq!(parse_range("AA,."), WILDCARD);
        assert_eq!(parse_range(".,AA"), WILDCARD);
        assert_eq!(parse_range("AKs, ., 22-55"), WILDCARD);
        assert_eq!(expand_range("KK,."), vec![CardSet::new()]);
    }

    #[test]
    fn test_union_removes_duplicates() {
        // AK already contains AKs and AKo.
        assert_eq!(expand_range("AK,AKs,AKo,AsKs").len(), 16);
        assert_eq!(expand_range("TT+,JJ,QQ-KK").len(), 30);
    }

    #[test]
    fn test_malformed_tokens_contribute_nothing() {
        assert_eq!(expand_range("AA,XYZ,A5-K2").len(), 6);
        assert!(expand_range("garbage").is_empty());
        assert_eq!(parse_range(""), "");
    }

    #[test]
    fn test_output_is_sorted_canonical_text() {
        let text = parse_range("KhAs,QdQc,2c2d");
        assert_eq!(text, "2d2c,AsKh,QdQc");
    }

    #[test]
    fn test_concrete_list_roundtrip_is_idempotent() {
        let once = parse_range("AsKh,Td9d,QcQh,9d8d,AsKh");
        let twice = parse_range(&once);
        assert_eq!(once, twice);
        assert_eq!(expand_range(&once), expand_range(&twice));
    }

    #[test]
    fn test_token_order_does_not_matter() {
        let mut tokens = vec!["AA", "KQs", "T9o+", "22-55", "A2s-A5s", "JhTh", "87"];
        let expected = parse_range(&tokens.join(","));
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..10 {
            tokens.shuffle(&mut rng);
            assert_eq!(parse_range(&tokens.join(",")), expected);
        }
    }
}
