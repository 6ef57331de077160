use crate::error::{ChunkerError, Result};
use crate::patterns::DEFAULT_IGNORE_PATTERNS;
use regex::RegexSet;
use serde::{Deserialize, Serialize};

/// Default upper bound on chunk size, in bytes
pub const DEFAULT_MAX_CHUNK_SIZE: u64 = 50_000;

/// Configuration for scanning and chunking behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Maximum total size of a multi-file chunk, in bytes.
    ///
    /// A single file larger than this still produces a chunk of its own; file
    /// content is never split.
    pub max_chunk_size: u64,

    /// Regex patterns matched against slash-normalized relative paths;
    /// matching files are excluded from the scan entirely
    pub ignore_patterns: Vec<String>,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl ChunkerConfig {
    /// Builder: set the maximum chunk size
    #[must_use]
    pub const fn with_max_chunk_size(mut self, bytes: u64) -> Self {
        self.max_chunk_size = bytes;
        self
    }

    /// Builder: replace the ignore pattern set
    #[must_use]
    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_size == 0 {
            return Err(ChunkerError::invalid_config("max_chunk_size must be > 0"));
        }

        RegexSet::new(&self.ignore_patterns)
            .map_err(|e| ChunkerError::invalid_config(format!("bad ignore pattern: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ChunkerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_chunk_size, DEFAULT_MAX_CHUNK_SIZE);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let config = ChunkerConfig::default().with_max_chunk_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_pattern_is_rejected() {
        let config = ChunkerConfig::default().with_ignore_patterns(vec!["[".to_string()]);
        assert!(config.validate().is_err());
    }
}
