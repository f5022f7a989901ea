//! API error types with IntoResponse
//!
//! The single translation point between the query layer and HTTP.
//! Everything a handler can fail with ends up as an `ApiError`, and the
//! response body is always `{"msg": ...}` with the matching status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

// Postgres error codes the translator recognizes.
const NOT_NULL_VIOLATION: &str = "23502";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const INVALID_TEXT_REPRESENTATION: &str = "22P02";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed or input was malformed (400)
    BadRequest(&'static str),

    /// Resource not found (404)
    NotFound(&'static str),

    /// Unrecognized database error (500, logged)
    Database(sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, *msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, *msg),
            Self::Database(e) => {
                // Log the actual error, return a generic message
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        (status, Json(json!({ "msg": msg }))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::BadRequest(e.msg())
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            // Domain rejections carry their message through unchanged.
            DbError::NotFound { msg } => Self::NotFound(msg),
            DbError::Sqlx(e) => match e.as_database_error().and_then(|d| d.code()).as_deref() {
                Some(NOT_NULL_VIOLATION) | Some(INVALID_TEXT_REPRESENTATION) => {
                    Self::BadRequest("Bad Request")
                }
                Some(FOREIGN_KEY_VIOLATION) => Self::NotFound("Not Found"),
                _ => Self::Database(e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn bad_request_is_400_with_msg_body() {
        let response = ApiError::BadRequest("Bad Request").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "msg": "Bad Request" }));
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::NotFound("Article_id Not Found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["msg"], "Article_id Not Found");
    }

    #[tokio::test]
    async fn unrecognized_database_error_is_masked_500() {
        let response = ApiError::Database(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["msg"], "Internal Server Error");
    }

    #[test]
    fn validation_errors_become_bad_requests() {
        let err: ApiError = ValidationError::BadSortBy.into();
        assert!(matches!(err, ApiError::BadRequest("Bad sort_by Request")));

        let err: ApiError = ValidationError::MissingBody.into();
        assert!(matches!(err, ApiError::BadRequest("Comment Not Found")));
    }

    #[test]
    fn domain_not_found_passes_through() {
        let err: ApiError = DbError::NotFound {
            msg: "Comment_id Not Found",
        }
        .into();
        assert!(matches!(err, ApiError::NotFound("Comment_id Not Found")));
    }

    #[test]
    fn non_database_sqlx_errors_stay_internal() {
        let err: ApiError = DbError::Sqlx(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, ApiError::Database(_)));
    }
}
