use thiserror::Error;

/// Error type that captures dataset, configuration and view-state failures.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Saved state error: {0}")]
    State(#[from] StateError),
}

/// Reasons a saved view-state blob can be rejected while decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("not a pie chart state blob")]
    BadMagic,
    #[error("unsupported state format version {0}")]
    UnsupportedVersion(u8),
    #[error("state blob ended while reading `{field}`")]
    Truncated { field: &'static str },
    #[error("{0} unexpected trailing bytes after state blob")]
    TrailingBytes(usize),
    #[error("center label is not valid UTF-8")]
    InvalidUtf8,
}
