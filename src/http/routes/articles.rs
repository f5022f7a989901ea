//! Article endpoints, including the per-article comment routes

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::repos::{Article, ArticleListing, ArticleRepo, Comment, CommentRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::server::AppState;
use crate::models::{NewComment, Order, SortBy, ValidationError};

#[derive(Serialize)]
pub struct ArticleResponse {
    pub article: Article,
}

#[derive(Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleListing>,
}

#[derive(Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

#[derive(Serialize)]
pub struct CommentResponse {
    pub comment: Comment,
}

/// Query string for the article list
#[derive(Debug, Default, Deserialize)]
pub struct ArticleListParams {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// New-comment request body; both fields checked by the models layer
#[derive(Deserialize)]
pub struct CreateCommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}

/// GET /api/articles/{article_id} - one article, body included
async fn get_article(
    State(state): State<Arc<AppState>>,
    ValidId(article_id): ValidId,
) -> Result<Json<ArticleResponse>, ApiError> {
    let article = ArticleRepo::new(&state.pool).get(article_id).await?;
    Ok(Json(ArticleResponse { article }))
}

/// GET /api/articles - list articles with optional filter and sort
async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ArticleListParams>,
) -> Result<Json<ArticlesResponse>, ApiError> {
    let sort_by = SortBy::parse(params.sort_by.as_deref())?;
    let order = Order::parse(params.order.as_deref())?;

    let articles = ArticleRepo::new(&state.pool)
        .list(params.topic.as_deref(), sort_by, order)
        .await?;

    Ok(Json(ArticlesResponse { articles }))
}

/// PATCH /api/articles/{article_id} - adjust votes
///
/// The body is inspected as loose JSON: a missing or non-integer
/// inc_votes is a 400 regardless of what else the body carries.
async fn patch_article(
    State(state): State<Arc<AppState>>,
    ValidId(article_id): ValidId,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let inc_votes = body
        .get("inc_votes")
        .and_then(Value::as_i64)
        .and_then(|v| i32::try_from(v).ok())
        .ok_or(ValidationError::MissingIncVotes)?;

    let article = ArticleRepo::new(&state.pool)
        .increment_votes(article_id, inc_votes)
        .await?;

    Ok(Json(ArticleResponse { article }))
}

/// GET /api/articles/{article_id}/comments - an article's comments
///
/// The comments fetch and the existence check run together; only the
/// existence check can reject, so a present article with no comments
/// still serves an empty array.
async fn list_article_comments(
    State(state): State<Arc<AppState>>,
    ValidId(article_id): ValidId,
) -> Result<Json<CommentsResponse>, ApiError> {
    let comment_repo = CommentRepo::new(&state.pool);
    let article_repo = ArticleRepo::new(&state.pool);

    let (comments, _) = tokio::try_join!(
        comment_repo.list_for_article(article_id),
        article_repo.exists(article_id)
    )?;

    Ok(Json(CommentsResponse { comments }))
}

/// POST /api/articles/{article_id}/comments - add a comment
async fn post_article_comment(
    State(state): State<Arc<AppState>>,
    ValidId(article_id): ValidId,
    JsonBody(req): JsonBody<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let new_comment = NewComment::new(req.username, req.body)?;

    let comment = CommentRepo::new(&state.pool)
        .create(article_id, &new_comment)
        .await?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

/// Article routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/articles", get(list_articles))
        .route(
            "/api/articles/{article_id}",
            get(get_article).patch(patch_article),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(list_article_comments).post(post_article_comment),
        )
}
