//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use zakvibe_shared::StoreError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("No authorization token")]
    MissingToken,
    #[error("Invalid token")]
    InvalidToken,

    // Client errors
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("User not found")]
    NotFound,

    // Internal errors
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            ApiError::MissingToken => (StatusCode::UNAUTHORIZED, "NO_TOKEN"),
            ApiError::InvalidToken => (StatusCode::UNAUTHORIZED, "INVALID_TOKEN"),
            ApiError::UserAlreadyExists => (StatusCode::BAD_REQUEST, "USER_EXISTS"),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = Json(json!({
            "success": false,
            "error": {
                "code": code,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => ApiError::UserAlreadyExists,
        }
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (ApiError::MissingToken, StatusCode::UNAUTHORIZED),
            (ApiError::InvalidToken, StatusCode::UNAUTHORIZED),
            (ApiError::UserAlreadyExists, StatusCode::BAD_REQUEST),
            (
                ApiError::Validation("bad email".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::NotFound, StatusCode::NOT_FOUND),
            (ApiError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_store_error_maps_to_bad_request() {
        let err: ApiError = StoreError::DuplicateEmail.into();
        assert!(matches!(err, ApiError::UserAlreadyExists));
    }
}
