//! Upstream client error types.

use thiserror::Error;

/// Errors talking to the upstream provider.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Request could not be sent or the body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a status other than 200.
    #[error("upstream returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// Body is not the expected JSON shape.
    #[error("malformed upstream payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl UpstreamError {
    /// True when the provider answered but the payload was unusable.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
