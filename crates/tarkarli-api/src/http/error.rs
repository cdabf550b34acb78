//! Application error type mapping to HTTP status codes.
//!
//! Only client input errors ever leave the chat handler as errors; upstream
//! trouble is already folded into a fallback reply by the relay.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use tarkarli_types::chat::ErrorBody;
use tarkarli_types::error::ValidationError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or incomplete request body.
    Validation(ValidationError),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        };

        tracing::debug!(status = status.as_u16(), error = %message, "request rejected");

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let response = AppError::from(ValidationError::EmptyMessages).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
