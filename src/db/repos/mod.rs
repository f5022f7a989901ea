//! Repository implementations for database access
//!
//! One repository per entity. Cheap input validation happens in the
//! models layer before these run; repositories only see typed input.
//! Absence is reported as `DbError::NotFound` carrying the client-facing
//! message, so the HTTP error translator can pass it through unchanged.

pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;

pub use articles::{Article, ArticleListing, ArticleRepo};
pub use comments::{Comment, CommentRepo};
pub use topics::{Topic, TopicRepo};
pub use users::{User, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{msg}")]
    NotFound { msg: &'static str },
}
