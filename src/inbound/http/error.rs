//! HTTP error payload and the catch-all conversion to JSON responses.
//!
//! Any error escaping a handler renders as HTTP 500 with an
//! `{"error": <message>}` body; per-request failures never take the
//! process down.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::UserRepositoryError;

/// Error envelope returned for uncaught handler failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    /// Human-readable error message.
    #[schema(example = "Internal Server Error")]
    pub error: String,
}

/// Fallback message used when an error carries no text of its own.
const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

impl ApiError {
    /// Create an error payload; a blank message falls back to
    /// `"Internal Server Error"`.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::internal()
        } else {
            Self { error: message }
        }
    }

    /// The generic internal-error payload.
    pub fn internal() -> Self {
        Self { error: INTERNAL_SERVER_ERROR.to_owned() }
    }
}

impl From<UserRepositoryError> for ApiError {
    fn from(err: UserRepositoryError) -> Self {
        // Store errors surface with their raw message; there is no
        // client-facing taxonomy below the 500 status.
        Self::new(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        error!(message = %self.error, "request failed");
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::{Value, json};

    #[test]
    fn every_api_error_maps_to_500() {
        assert_eq!(ApiError::new("boom").status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::internal().status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn blank_message_falls_back_to_generic_text() {
        assert_eq!(ApiError::new("").error, INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::new("   ").error, INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::new("real message").error, "real message");
    }

    #[test]
    fn repository_errors_keep_their_message() {
        let err = ApiError::from(UserRepositoryError::constraint(
            "UNIQUE constraint failed: users.email",
        ));
        assert!(err.error.contains("UNIQUE constraint failed: users.email"));
    }

    #[actix_web::test]
    async fn response_body_is_the_error_envelope() {
        let response = ApiError::new("boom").error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body()).await.expect("read response body");
        let body: Value = serde_json::from_slice(&bytes).expect("body is JSON");
        assert_eq!(body, json!({ "error": "boom" }));
    }
}
