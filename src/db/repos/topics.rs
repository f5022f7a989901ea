//! Topic repository
//!
//! Topics are read-only through the API.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;

/// Topic record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

/// Topic repository
pub struct TopicRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TopicRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all topics.
    ///
    /// An empty topic set is reported as not-found rather than an empty
    /// list; the contract treats a topicless store as absence.
    pub async fn list(&self) -> Result<Vec<Topic>, DbError> {
        let topics: Vec<Topic> = sqlx::query_as("SELECT slug, description FROM topics")
            .fetch_all(self.pool)
            .await?;

        if topics.is_empty() {
            return Err(DbError::NotFound { msg: "Not Found" });
        }

        Ok(topics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_support::setup_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn lists_all_topics() {
        let pool = setup_pool().await;
        let topics = TopicRepo::new(&pool).list().await.unwrap();

        assert_eq!(topics.len(), 3);
        assert!(topics.iter().any(|t| t.slug == "mitch"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn empty_topic_set_is_not_found() {
        let pool = setup_pool().await;
        sqlx::raw_sql("DELETE FROM comments; DELETE FROM articles; DELETE FROM topics")
            .execute(&pool)
            .await
            .unwrap();

        let err = TopicRepo::new(&pool).list().await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { msg: "Not Found" }));
    }
}
