//! Domain Errors for Peer Discovery

use thiserror::Error;

/// Why an announce payload was refused.
///
/// Absorbed by the service layer: a bad announce is logged and dropped,
/// never allowed to touch the routing table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DescriptorError {
    /// `sourceId` absent, null or blank
    #[error("peer descriptor has no sourceId")]
    MissingSourceId,

    /// Payload is not a JSON object of the expected shape
    #[error("malformed peer descriptor: {0}")]
    MalformedJson(String),

    /// `contributions` is negative or not a finite number
    #[error("invalid contributions value: {0}")]
    InvalidContributions(f64),
}

/// Configuration loading and validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read {path}: {error}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// Error message from the I/O operation.
        error: String,
    },

    /// TOML parsing error.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A value is out of its allowed range.
    #[error("Invalid config value: {0}")]
    Invalid(String),
}
