//! Errors raised while fetching the users list and the user-facing messages derived
//! from them. Messages end up in rendered output, so they must never carry secrets.

use std::error::Error as StdError;
use thiserror::Error;

/// Message shown when a failure carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "An unknown error occurred";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("Failed to fetch users: {status} {status_text}")]
    Request { status: u16, status_text: String },
    #[error("Unable to reach the server: {0}")]
    Network(String),
    #[error("Request timed out. Please try again.")]
    Timeout,
    #[error("Failed to decode response: {0}")]
    Parse(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl FetchError {
    /// Builds a request error from a status code and the reason phrase the server
    /// sent, falling back to the canonical reason when none was received.
    #[must_use]
    pub fn from_status(status: reqwest::StatusCode, reason: Option<&str>) -> Self {
        let status_text = reason
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .or_else(|| status.canonical_reason())
            .unwrap_or_default();

        Self::Request {
            status: status.as_u16(),
            status_text: status_text.to_string(),
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable text for the error view.
    #[must_use]
    pub fn message(&self) -> String {
        display_message(self)
    }
}

/// Derives the message surfaced to the user from any error, falling back to
/// [`FALLBACK_MESSAGE`] when the error renders as blank text.
#[must_use]
pub fn display_message(err: &(dyn StdError + '_)) -> String {
    let message = err.to_string();
    let trimmed = message.trim();

    if trimmed.is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        trimmed.to_string()
    }
}
