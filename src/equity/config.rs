//! Configuration options for the showdown enumerator.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the showdown enumerator.
///
/// Controls how the outer enumeration (one index per player distribution)
/// is split into shards and whether those shards run on a thread pool.
/// Every setting leaves the result unchanged; only speed and reporting
/// differ.
///
/// # Example
/// ```
/// use showdown_equity::equity::EnumeratorConfig;
///
/// let config = EnumeratorConfig::default().with_parallel(true).with_threads(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumeratorConfig {
    /// Run outer shards on a rayon thread pool.
    pub parallel: bool,

    /// Number of threads to use in parallel mode.
    ///
    /// Set to `None` to use rayon's global pool (all available cores).
    pub num_threads: Option<usize>,

    /// Outer index tuples per shard.
    ///
    /// Shard boundaries fix the order in which partial sums are merged, so
    /// a given chunk size always produces the same floating point result
    /// whether run serially or in parallel.
    pub chunk_size: usize,

    /// Draw a progress bar on stderr, advanced once per shard.
    pub show_progress: bool,
}

impl Default for EnumeratorConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            num_threads: None,
            chunk_size: 64,
            show_progress: false,
        }
    }
}

impl EnumeratorConfig {
    /// Create a new EnumeratorConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parallel configuration on all available cores.
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Default::default()
        }
    }

    /// Builder method: enable or disable parallel shards.
    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    /// Builder method: set number of threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Builder method: set outer tuples per shard.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Builder method: show or hide the progress bar.
    pub fn with_progress(mut self, enable: bool) -> Self {
        self.show_progress = enable;
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize);
        }
        if self.num_threads == Some(0) {
            return Err(ConfigError::InvalidThreads);
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON. Missing fields take
    /// their default values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::IoError(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::from_json_str(&text)
    }
}

/// Errors that can occur when loading or validating enumerator configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Shards must hold at least one outer tuple.
    InvalidChunkSize,
    /// A thread pool needs at least one thread.
    InvalidThreads,
    /// The configuration file could not be read.
    IoError(String),
    /// The configuration text is not valid JSON for this struct.
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidChunkSize => write!(f, "Chunk size must be at least 1"),
            ConfigError::InvalidThreads => write!(f, "Thread count must be at least 1"),
            ConfigError::IoError(msg) => write!(f, "Failed to read config: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_serial() {
        let config = EnumeratorConfig::default();
        assert!(!config.parallel);
        assert_eq!(config.num_threads, None);
        assert_eq!(config.chunk_size, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = EnumeratorConfig::new()
            .with_parallel(true)
            .with_threads(3)
            .with_chunk_size(8)
            .with_progress(true);
        assert!(config.parallel);
        assert_eq!(config.num_threads, Some(3));
        assert_eq!(config.chunk_size, 8);
        assert!(config.show_progress);
        assert!(EnumeratorConfig::parallel().parallel);
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            EnumeratorConfig::new().with_chunk_size(0).validate(),
            Err(ConfigError::InvalidChunkSize)
        );
        assert_eq!(
            EnumeratorConfig::new().with_threads(0).validate(),
            Err(ConfigError::InvalidThreads)
        );
    }

    #[test]
    fn test_from_json_partial() {
        let config = EnumeratorConfig::from_json_str(r#"{"parallel": true}"#).unwrap();
        assert!(config.parallel);
        assert_eq!(config.chunk_size, 64);

        let err = EnumeratorConfig::from_json_str(r#"{"chunk_size": 0}"#).unwrap_err();
        assert_eq!(err, ConfigError::InvalidChunkSize);
        assert!(matches!(
            EnumeratorConfig::from_json_str("not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join("showdown_equity_config_test.json");
        let config = EnumeratorConfig::parallel().with_chunk_size(16);
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();
        let loaded = EnumeratorConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);

        assert!(matches!(
            EnumeratorConfig::from_json_file("/nonexistent/equity.json"),
            Err(ConfigError::IoError(_))
        ));
    }
}
