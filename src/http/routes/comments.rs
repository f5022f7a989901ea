//! Comment endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::delete;
use axum::Router;

use crate::db::repos::CommentRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;

/// DELETE /api/comments/{comment_id} - remove a comment, no body
async fn delete_comment(
    State(state): State<Arc<AppState>>,
    ValidId(comment_id): ValidId,
) -> Result<StatusCode, ApiError> {
    CommentRepo::new(&state.pool).delete(comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Comment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/comments/{comment_id}", delete(delete_comment))
}
