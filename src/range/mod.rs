//! Hand range notation.
//!
//! This module turns range shorthand (`AKs+`, `22-66`, `.`) into the explicit
//! card combinations it stands for, and those into weighted distributions.
//!
//! - `token`: classification of one token and its expansion rule
//! - `parser`: comma lists, union/dedup and the normalized text form
//! - `distribution`: `HandDistribution`, the engine's per-player input

pub mod distribution;
pub mod parser;
pub mod token;

pub use distribution::{HandDistribution, RangeError};
pub use parser::{expand_range, expand_token, parse_range, WILDCARD};
pub use token::{RangeToken, Suitedness};
