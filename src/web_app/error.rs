// web_app/error.rs - Error types
//
// Fetch failures are captured into provider state as plain strings, so the
// only thing callers ever see is the rendered message.

use thiserror::Error;

/// Failure of one catalog request
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connection reset...)
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("[GET] {url}: {status}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON array we expected
    #[error("{0}")]
    Decode(String),
}

impl FetchError {
    /// Message shown to the user, or `fallback` when the error carries none
    pub fn user_message(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

/// Invalid configuration value
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be an http(s) URL, got {value:?}")]
    InvalidUrl { name: &'static str, value: String },
}
