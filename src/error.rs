// Error types
// Formatting and encoding are total; errors only exist at the
// configuration and scan-sink seams.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base domain '{value}': {reason}")]
    InvalidBaseDomain { value: String, reason: String },

    #[error("unsupported scheme '{0}' for base domain, expected http or https")]
    UnsupportedScheme(String),

    #[error("base domain must not carry a query or fragment: {0}")]
    UnexpectedComponents(String),
}

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("scan sink rejected event for '{qr_code_id}': {reason}")]
    Sink { qr_code_id: String, reason: String },
}

pub type Result<T> = std::result::Result<T, TrackError>;
