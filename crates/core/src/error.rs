//! Error types for the casenumber core library.

use thiserror::Error;

/// Core error type for casenumber operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The host rejected a compose read or write (no compose window,
    /// permission denied, host API failure).
    #[error("Host compose call failed: {0}")]
    HostCall(String),

    /// A timestamp given on the command line or in a test could not be parsed.
    #[error("Invalid timestamp '{0}' (expected YYYY-MM-DDTHH:MM)")]
    InvalidTimestamp(String),

    /// IO operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing failed.
    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias using the core Error type.
pub type Result<T> = std::result::Result<T, Error>;
