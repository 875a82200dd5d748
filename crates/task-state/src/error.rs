//! Store Errors

/// Result type for key-value store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a key-value store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing storage cannot be reached at all
    Unavailable(String),
    Read { key: String, reason: String },
    Write { key: String, reason: String },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StoreError::Read { key, reason } => write!(f, "Failed to read '{}': {}", key, reason),
            StoreError::Write { key, reason } => write!(f, "Failed to write '{}': {}", key, reason),
        }
    }
}

impl std::error::Error for StoreError {}
