//! Comment repository

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::models::NewComment;

use super::DbError;

/// Comment record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Comment repository
pub struct CommentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List an article's comments, most recent first.
    ///
    /// Never raises not-found: an unknown article and an article with no
    /// comments both come back empty here. Callers that need to tell
    /// them apart pair this with `ArticleRepo::exists`.
    pub async fn list_for_article(&self, article_id: i32) -> Result<Vec<Comment>, DbError> {
        let comments: Vec<Comment> = sqlx::query_as(
            r#"
            SELECT comment_id, article_id, author, body, votes, created_at
            FROM comments
            WHERE article_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(article_id)
        .fetch_all(self.pool)
        .await?;

        Ok(comments)
    }

    /// Insert a comment and return the stored row.
    ///
    /// An unknown article id trips the foreign-key constraint; the error
    /// translator turns that into not-found.
    pub async fn create(
        &self,
        article_id: i32,
        new_comment: &NewComment,
    ) -> Result<Comment, DbError> {
        let comment: Comment = sqlx::query_as(
            r#"
            INSERT INTO comments (article_id, author, body)
            VALUES ($1, $2, $3)
            RETURNING comment_id, article_id, author, body, votes, created_at
            "#,
        )
        .bind(article_id)
        .bind(&new_comment.username)
        .bind(&new_comment.body)
        .fetch_one(self.pool)
        .await?;

        Ok(comment)
    }

    /// Delete a comment by id.
    pub async fn delete(&self, comment_id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                msg: "Comment_id Not Found",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_support::setup_pool;
    use crate::models::NewComment;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn lists_comments_most_recent_first() {
        let pool = setup_pool().await;
        let comments = CommentRepo::new(&pool).list_for_article(1).await.unwrap();

        assert_eq!(comments.len(), 3);
        for pair in comments.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
        assert_eq!(comments[0].body, "I hate streaming noses");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn article_without_comments_lists_empty() {
        let pool = setup_pool().await;
        let comments = CommentRepo::new(&pool).list_for_article(2).await.unwrap();
        assert!(comments.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn created_comment_appears_at_head_of_listing() {
        let pool = setup_pool().await;
        let repo = CommentRepo::new(&pool);

        let new_comment = NewComment::new(
            Some("butter_bridge".into()),
            Some("The answer is doughnuts".into()),
        )
        .unwrap();
        let created = repo.create(1, &new_comment).await.unwrap();

        assert_eq!(created.article_id, 1);
        assert_eq!(created.author, "butter_bridge");
        assert_eq!(created.votes, 0);

        let comments = repo.list_for_article(1).await.unwrap();
        assert_eq!(comments[0].comment_id, created.comment_id);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_against_unknown_article_is_fk_violation() {
        let pool = setup_pool().await;
        let new_comment = NewComment::new(
            Some("butter_bridge".into()),
            Some("The answer is doughnuts".into()),
        )
        .unwrap();

        let err = CommentRepo::new(&pool).create(999, &new_comment).await.unwrap_err();
        let DbError::Sqlx(err) = err else {
            panic!("expected a database error, got {err:?}");
        };
        let code = err
            .as_database_error()
            .and_then(|d| d.code())
            .expect("fk violation carries a code");
        assert_eq!(code, "23503");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn second_delete_of_same_comment_is_not_found() {
        let pool = setup_pool().await;
        let repo = CommentRepo::new(&pool);

        repo.delete(1).await.unwrap();
        let err = repo.delete(1).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::NotFound {
                msg: "Comment_id Not Found"
            }
        ));
    }
}
