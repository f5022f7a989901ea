//! Article repository
//!
//! Carries the dynamic list query: optional topic filter (bound
//! parameter), caller-chosen sort column and direction (interpolated,
//! but only from the `SortBy`/`Order` allow-list enums), and a
//! comment_count aggregate from a LEFT JOIN. Votes are mutated with a
//! single atomic UPDATE so concurrent patches never lose increments.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool, Row};

use crate::models::{Order, SortBy};

use super::DbError;

/// Full article record, including body
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
}

/// Article row for list responses: no body, plus the comment count.
///
/// comment_count stays string-typed on the wire; it is the text form of
/// the bigint aggregate, cast in SQL.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleListing {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: String,
}

/// Article repository
pub struct ArticleRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArticleRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch one article by id, body included.
    pub async fn get(&self, article_id: i32) -> Result<Article, DbError> {
        let article: Article = sqlx::query_as(
            r#"
            SELECT article_id, title, topic, author, body, created_at, votes, article_img_url
            FROM articles
            WHERE article_id = $1
            "#,
        )
        .bind(article_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            msg: "Article_id Not Found",
        })?;

        Ok(article)
    }

    /// List articles, optionally filtered by topic, sorted by an
    /// allow-listed column.
    ///
    /// A provided topic is checked against the topics table first so an
    /// unknown filter value is distinguished from a known topic with no
    /// articles: the former is not-found, the latter an empty Vec.
    pub async fn list(
        &self,
        topic: Option<&str>,
        sort_by: SortBy,
        order: Order,
    ) -> Result<Vec<ArticleListing>, DbError> {
        if let Some(topic) = topic {
            let known: (bool,) =
                sqlx::query_as("SELECT EXISTS(SELECT 1 FROM topics WHERE slug = $1)")
                    .bind(topic)
                    .fetch_one(self.pool)
                    .await?;

            if !known.0 {
                return Err(DbError::NotFound { msg: "Not Found" });
            }
        }

        let mut sql = String::from(
            r#"
            SELECT
                articles.article_id,
                articles.title,
                articles.topic,
                articles.author,
                articles.created_at,
                articles.votes,
                articles.article_img_url,
                COUNT(comments.comment_id)::text AS comment_count
            FROM articles
            LEFT JOIN comments ON comments.article_id = articles.article_id
            "#,
        );

        if topic.is_some() {
            sql.push_str("WHERE articles.topic = $1\n");
        }

        sql.push_str("GROUP BY articles.article_id\n");
        // Identifiers come from the allow-list enums, never from raw input.
        sql.push_str(&format!(
            "ORDER BY articles.{} {}",
            sort_by.as_column(),
            order.as_sql()
        ));

        let mut query = sqlx::query(&sql);
        if let Some(topic) = topic {
            query = query.bind(topic);
        }

        let rows = query.fetch_all(self.pool).await?;

        let articles = rows
            .into_iter()
            .map(|r| ArticleListing {
                article_id: r.get("article_id"),
                title: r.get("title"),
                topic: r.get("topic"),
                author: r.get("author"),
                created_at: r.get("created_at"),
                votes: r.get("votes"),
                article_img_url: r.get("article_img_url"),
                comment_count: r.get("comment_count"),
            })
            .collect();

        Ok(articles)
    }

    /// Atomically adjust an article's votes and return the updated row.
    ///
    /// The increment may be negative; no lower bound is enforced.
    pub async fn increment_votes(&self, article_id: i32, by: i32) -> Result<Article, DbError> {
        let article: Article = sqlx::query_as(
            r#"
            UPDATE articles
            SET votes = votes + $1
            WHERE article_id = $2
            RETURNING article_id, title, topic, author, body, created_at, votes, article_img_url
            "#,
        )
        .bind(by)
        .bind(article_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            msg: "Article_id Not Found",
        })?;

        Ok(article)
    }

    /// Check that an article exists.
    ///
    /// Companion to the comments listing: the caller runs both together
    /// and uses this rejection to distinguish a missing article from an
    /// article with zero comments.
    pub async fn exists(&self, article_id: i32) -> Result<(), DbError> {
        let found: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM articles WHERE article_id = $1)")
                .bind(article_id)
                .fetch_one(self.pool)
                .await?;

        if !found.0 {
            return Err(DbError::NotFound {
                msg: "Article_id Not Found",
            });
        }

        Ok(())
    }
}
