//! Failure taxonomy for backend calls.
//!
//! Every variant is displayed to the user as the caller's static fallback
//! text; the detail here only reaches the log.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a backend call did not produce a usable payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("server returned status {0}")]
    Server(u16),
    /// The body was not the JSON shape the panel expects.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// HTTP is only available in the browser.
    #[error("not available on server")]
    Unavailable,
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
