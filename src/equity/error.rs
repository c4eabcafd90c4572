//! Errors surfaced by the enumerator.

use super::config::ConfigError;
use crate::range::RangeError;
use std::fmt;

/// Reasons an equity calculation is refused before any enumeration starts.
#[derive(Debug, Clone, PartialEq)]
pub enum EquityError {
    /// No evaluator was supplied.
    NullEvaluator,
    /// No player distributions were supplied.
    NoPlayers,
    /// The distribution for this player has no entries.
    EmptyDistribution(usize),
    /// A distribution entry holds more cards than a complete hand.
    OversizedHand {
        /// Player index.
        player: usize,
        /// Cards in the offending entry.
        size: usize,
        /// The evaluator's hand size.
        hand_size: usize,
    },
    /// The board holds more cards than a complete board.
    OversizedBoard {
        /// Cards on the given board.
        size: usize,
        /// The evaluator's board size.
        board_size: usize,
    },
    /// A range or hand list could not be turned into a distribution.
    Range(RangeError),
    /// The enumerator configuration is invalid.
    Config(ConfigError),
    /// The worker thread pool could not be built.
    ThreadPool(String),
}

impl fmt::Display for EquityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullEvaluator => write!(f, "No showdown evaluator supplied"),
            Self::NoPlayers => write!(f, "No player distributions supplied"),
            Self::EmptyDistribution(p) => write!(f, "Player {} has an empty distribution", p),
            Self::OversizedHand {
                player,
                size,
                hand_size,
            } => write!(
                f,
                "Player {} has a {}-card hand, evaluator expects {}",
                player, size, hand_size
            ),
            Self::OversizedBoard { size, board_size } => write!(
                f,
                "Board has {} cards, evaluator expects at most {}",
                size, board_size
            ),
            Self::Range(e) => write!(f, "{}", e),
            Self::Config(e) => write!(f, "{}", e),
            Self::ThreadPool(msg) => write!(f, "Failed to build thread pool: {}", msg),
        }
    }
}

impl std::error::Error for EquityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Range(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RangeError> for EquityError {
    fn from(e: RangeError) -> Self {
        Self::Range(e)
    }
}

impl From<ConfigError> for EquityError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
