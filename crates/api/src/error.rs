//! Mapping of application errors onto HTTP responses.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use fxgate_shared::AppError;
use fxgate_upstream::UpstreamError;

/// Error returned from handlers; renders as [`ErrorBody`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// JSON body of an error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Stable error code, e.g. `INVALID_DATE`.
    #[schema(example = "INVALID_DATE")]
    pub error: &'static str,
    /// Human readable description.
    #[schema(example = "Invalid date: 2099-01-01 is later than the current date!")]
    pub message: String,
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Response body for this error.
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.0.error_code(),
            message: self.0.to_string(),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(AppError::InvalidParameters(rejection.body_text()))
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { body, .. } => Self(AppError::ExternalService(body)),
            UpstreamError::Transport(e) => Self(AppError::ExternalService(e.to_string())),
            UpstreamError::Decode(_) => Self(AppError::InvalidUpstreamResponse),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
