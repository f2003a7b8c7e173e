//! Error types for PagerDuty API operations.

use thiserror::Error;

/// Errors that can occur during PagerDuty API operations.
#[derive(Debug, Error)]
pub enum PagerDutyError {
    /// Configuration is missing or incomplete.
    #[error("PagerDuty configuration required: {0}")]
    ConfigMissing(String),

    /// The server answered with a status other than the one the operation expects.
    ///
    /// `message` is the status reason phrase, `None` for codes without one.
    #[error("PagerDuty API error {status}: {}", message.as_deref().unwrap_or("<no reason>"))]
    Status {
        message: Option<String>,
        status: u16,
    },

    /// An expected field was absent from a response envelope.
    #[error("Response is missing field '{field}'")]
    MissingField { field: String },

    /// JSON parsing or model decoding failed.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request was issued on a session that has been closed.
    #[error("Session is closed")]
    SessionClosed,

    /// The session's cancellation token fired while a request was in flight.
    #[error("Request cancelled")]
    Cancelled,

    /// Pagination exceeded the configured page or item limit.
    #[error("Pagination limit exceeded after {pages} pages ({items} items)")]
    PaginationLimitExceeded { pages: u32, items: usize },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Caller supplied an argument the operation cannot use.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PagerDutyError {
    /// HTTP status of a failed exchange, if this is a status error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for a 404 status error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub(crate) fn missing_field(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }
}

/// Result type alias for PagerDuty operations.
pub type Result<T> = core::result::Result<T, PagerDutyError>;
