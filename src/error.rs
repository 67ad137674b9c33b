//! Error types for Postlane API operations.

use thiserror::Error;

/// Fallback reason used when a failed response carries no readable error envelope.
pub const UNKNOWN_REASON: &str = "Unknown reason";

/// A non-2xx response from the Postlane API.
///
/// Two errors are equal when both the status code and the reason match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Postlane API returned {status_code}: {reason}")]
pub struct RequestError {
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Vendor-supplied reason, or [`UNKNOWN_REASON`].
    pub reason: String,
}

impl RequestError {
    /// Create a request error from a status code and reason.
    pub fn new(status_code: u16, reason: impl Into<String>) -> Self {
        Self {
            status_code,
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during Postlane API operations.
#[derive(Debug, Error)]
pub enum PostlaneError {
    /// Configuration is missing or incomplete.
    #[error("Postlane configuration required: {0}")]
    ConfigMissing(String),

    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// A success response (or a custom property inside it) could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request did not complete within the client timeout.
    #[error("Request timed out")]
    Timeout,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Transport(reqwest::Error),

    /// The response body exceeded the maximum accepted size.
    #[error("Response body exceeds {limit} bytes")]
    ResponseTooLarge { limit: usize },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Too many contacts in a single batch create.
    #[error("Batch of {size} contacts exceeds the maximum of {max}")]
    BatchTooLarge { size: usize, max: usize },

    /// Pages are 1-indexed.
    #[error("Page numbers start at 1")]
    InvalidPage,
}

impl PostlaneError {
    /// HTTP status code, if the API returned one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request(err) => Some(err.status_code),
            _ => None,
        }
    }

    /// Whether this is a transport-level failure (timeout, connection, oversized body).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::Transport(_) | Self::ResponseTooLarge { .. }
        )
    }
}

impl From<reqwest::Error> for PostlaneError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err)
        }
    }
}

/// Result type alias for Postlane operations.
pub type Result<T> = core::result::Result<T, PostlaneError>;
