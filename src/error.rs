//! Common error types for the map generator client

use thiserror::Error;

/// Message shown when a failed generation carries no usable detail
pub const FALLBACK_MESSAGE: &str = "Failed to generate map. Please try again.";

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service returned {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Service { status: u16, detail: Option<String> },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Text to show the user when a generation attempt ends with this error.
    ///
    /// Only a service-provided, non-blank `detail` is surfaced verbatim;
    /// every other failure collapses to [`FALLBACK_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            AppError::Service {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
