//! Error types for the rigpanel client

use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum PanelError {
    /// Transport error (connect failure, timeout, non-success status)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Malformed state document
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PanelError>;

impl From<String> for PanelError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for PanelError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}
