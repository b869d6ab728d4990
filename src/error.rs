//! Custom error types for starview
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the starview application
#[derive(Error, Debug)]
pub enum StarviewError {
    /// API returned a non-success status code
    #[error("API request failed with status {status} for {url}\n\n  → The endpoint may be down, or the requested page may not exist.\n  → Run 'sv config show' to check the configured base URL.")]
    Api {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Base URL cannot be parsed
    #[error("Cannot parse API base URL: {0}\n\n  → Expected something like https://swapi.dev/api/people")]
    InvalidBaseUrl(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Network request error
    #[error("Network request failed: {0}\n\n  → Check your internet connection.")]
    Network(#[from] reqwest::Error),

    /// JSON deserialization error (non-JSON body, or a body without `results`)
    #[error("Failed to parse response: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),
}

impl From<toml::de::Error> for StarviewError {
    fn from(err: toml::de::Error) -> Self {
        StarviewError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for StarviewError {
    fn from(err: toml::ser::Error) -> Self {
        StarviewError::Toml(err.to_string())
    }
}

/// Result type alias using StarviewError
pub type Result<T> = std::result::Result<T, StarviewError>;
