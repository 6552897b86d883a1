// error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tokio_postgres::error::SqlState;

/// Error taxonomy for the message API
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request carried a malformed or rejected value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An insert collided with an existing primary key
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The database could not be reached or answered with an unexpected failure
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<deadpool_postgres::PoolError> for ApiError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        ApiError::StorageUnavailable(err.to_string())
    }
}

impl From<tokio_postgres::Error> for ApiError {
    fn from(err: tokio_postgres::Error) -> Self {
        // SQLSTATE 23505 is a unique violation, class 22 covers bad parameter data
        match err.code() {
            Some(state) if *state == SqlState::UNIQUE_VIOLATION => {
                ApiError::ConstraintViolation(err.to_string())
            }
            Some(state) if state.code().starts_with("22") => {
                ApiError::InvalidArgument(err.to_string())
            }
            _ => ApiError::StorageUnavailable(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::ConstraintViolation(_) => StatusCode::CONFLICT,
            ApiError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_maps_to_bad_request() {
        let response = ApiError::InvalidArgument("text must not be empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn constraint_violation_maps_to_conflict() {
        let response = ApiError::ConstraintViolation("duplicate key".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn storage_unavailable_maps_to_service_unavailable() {
        let response = ApiError::StorageUnavailable("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn error_body_is_json_with_error_field() {
        let response = ApiError::ConstraintViolation("duplicate key".into()).into_response();
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Constraint violation: duplicate key");
    }
}
