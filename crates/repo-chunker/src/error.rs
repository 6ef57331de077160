use thiserror::Error;

/// Result type for chunker operations
pub type Result<T> = std::result::Result<T, ChunkerError>;

/// Errors that can occur while scanning and chunking a directory
#[derive(Error, Debug)]
pub enum ChunkerError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Scan root does not exist or is not a directory
    #[error("Invalid scan root: {0}")]
    InvalidRoot(String),
}

impl ChunkerError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an invalid root error
    pub fn invalid_root(msg: impl Into<String>) -> Self {
        Self::InvalidRoot(msg.into())
    }
}
