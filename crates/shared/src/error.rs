//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// The resolved date cannot be served (e.g. it lies in the future).
    #[error("Invalid date: {0}!")]
    InvalidDate(String),

    /// Request parameters are malformed or out of range.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The upstream provider could not be reached or answered non-200.
    #[error("External exchange rate server error: {0}")]
    ExternalService(String),

    /// The upstream provider answered with a payload that fails validation.
    #[error("Invalid exchange rate server response!")]
    InvalidUpstreamResponse,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidDate(_) => 400,
            Self::InvalidParameters(_) => 422,
            Self::ExternalService(_) | Self::InvalidUpstreamResponse | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::InvalidParameters(_) => "INVALID_PARAMETERS",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::InvalidUpstreamResponse => "INVALID_UPSTREAM_RESPONSE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
