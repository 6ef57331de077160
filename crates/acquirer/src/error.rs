use thiserror::Error;

/// Result type for acquisition operations
pub type Result<T> = std::result::Result<T, AcquireError>;

/// Errors that can occur while resolving a target
#[derive(Error, Debug)]
pub enum AcquireError {
    /// Target is neither an existing local directory nor a parseable
    /// remote repository URL
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    /// Fresh clone of a remote repository failed
    #[error("Failed to clone {url}: {detail}")]
    CloneFailed { url: String, detail: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AcquireError {
    /// Create an invalid target error
    pub fn invalid_target(msg: impl Into<String>) -> Self {
        Self::InvalidTarget(msg.into())
    }
}
