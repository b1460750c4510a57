use thiserror::Error;

/// Unified error type for str-bump operations
#[derive(Error, Debug)]
pub enum StrBumpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Range error: {0}")]
    Range(String),

    #[error("Underflow: {0}")]
    Underflow(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in str-bump
pub type Result<T> = std::result::Result<T, StrBumpError>;

impl StrBumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        StrBumpError::Config(msg.into())
    }

    /// Create a range error with context
    pub fn range(msg: impl Into<String>) -> Self {
        StrBumpError::Range(msg.into())
    }

    /// Create an underflow error with context
    pub fn underflow(msg: impl Into<String>) -> Self {
        StrBumpError::Underflow(msg.into())
    }
}
