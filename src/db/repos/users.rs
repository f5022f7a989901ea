//! User repository
//!
//! Users are read-only through the API; same empty-set policy as topics.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;

/// User record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all users; an empty user set is reported as not-found.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users: Vec<User> = sqlx::query_as("SELECT username, name, avatar_url FROM users")
            .fetch_all(self.pool)
            .await?;

        if users.is_empty() {
            return Err(DbError::NotFound { msg: "Not Found" });
        }

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_support::setup_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn lists_all_users() {
        let pool = setup_pool().await;
        let users = UserRepo::new(&pool).list().await.unwrap();

        assert_eq!(users.len(), 3);
        assert!(users.iter().all(|u| !u.avatar_url.is_empty()));
    }
}
