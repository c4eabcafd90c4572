//! Exact equity enumeration.
//!
//! - `enumerator`: `ShowdownEnumerator`, the two-layer deal enumeration
//! - `config`: `EnumeratorConfig` (sharding, threads, progress)
//! - `summary`: run statistics and normalized per-player fractions
//! - `error`: `EquityError`

pub mod config;
pub mod enumerator;
pub mod error;
pub mod summary;

pub use config::{ConfigError, EnumeratorConfig};
pub use enumerator::ShowdownEnumerator;
pub use error::EquityError;
pub use summary::{EnumerationStats, EquitySummary, PlayerSummary};
