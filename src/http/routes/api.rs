//! The /api self-description endpoint
//!
//! Static configuration data built once at startup; nothing mutates it.

use axum::routing::get;
use axum::{Json, Router};
use once_cell::sync::Lazy;
use serde_json::{json, Value};

static ENDPOINTS: Lazy<Value> = Lazy::new(|| {
    json!({
        "GET /api": {
            "description": "serves up a json representation of all the available endpoints of the api"
        },
        "GET /api/topics": {
            "description": "serves an array of all topics",
            "queries": [],
            "exampleResponse": {
                "topics": [{ "slug": "football", "description": "Footie!" }]
            }
        },
        "GET /api/articles": {
            "description": "serves an array of all articles",
            "queries": ["author", "topic", "sort_by", "order"],
            "exampleResponse": {
                "articles": [
                    {
                        "title": "Seafood substitutions are increasing",
                        "topic": "cooking",
                        "author": "weegembump",
                        "body": "Text from the article..",
                        "created_at": "2018-05-30T15:59:13.341Z",
                        "votes": 0,
                        "comment_count": 6
                    }
                ]
            }
        },
        "GET /api/users": {
            "description": "serves an array of all users",
            "queries": [],
            "exampleResponse": {
                "users": [
                    {
                        "username": "weegembump",
                        "name": "Gemma Bump",
                        "avatar_url": "https://example.com/avatars/gemma.jpg"
                    }
                ]
            }
        },
        "GET /api/articles/:article_id": {
            "description": "serves a single article by id",
            "queries": [],
            "exampleResponse": {
                "article": {
                    "article_id": 1,
                    "title": "Seafood substitutions are increasing",
                    "topic": "cooking",
                    "author": "weegembump",
                    "body": "Text from the article..",
                    "created_at": "2018-05-30T15:59:13.341Z",
                    "votes": 0,
                    "article_img_url": "https://example.com/img/seafood.jpeg"
                }
            }
        },
        "PATCH /api/articles/:article_id": {
            "description": "increments an article's votes and serves the updated article",
            "queries": [],
            "exampleRequest": { "inc_votes": 10 },
            "exampleResponse": {
                "article": {
                    "article_id": 1,
                    "votes": 10
                }
            }
        },
        "GET /api/articles/:article_id/comments": {
            "description": "serves an array of comments for an article, most recent first",
            "queries": [],
            "exampleResponse": {
                "comments": [
                    {
                        "comment_id": 1,
                        "article_id": 1,
                        "author": "weegembump",
                        "body": "Great article!",
                        "votes": 0,
                        "created_at": "2018-05-30T16:59:13.341Z"
                    }
                ]
            }
        },
        "POST /api/articles/:article_id/comments": {
            "description": "adds a comment to an article and serves the created comment",
            "queries": [],
            "exampleRequest": { "username": "weegembump", "body": "Great article!" },
            "exampleResponse": {
                "comment": {
                    "comment_id": 2,
                    "article_id": 1,
                    "author": "weegembump",
                    "body": "Great article!",
                    "votes": 0,
                    "created_at": "2018-05-30T17:59:13.341Z"
                }
            }
        },
        "DELETE /api/comments/:comment_id": {
            "description": "deletes a comment by id, serving no content",
            "queries": [],
            "exampleResponse": {}
        }
    })
});

/// GET /api - describe every endpoint the API serves
async fn describe_endpoints() -> Json<&'static Value> {
    Json(&*ENDPOINTS)
}

/// API description route
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api", get(describe_endpoints))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn describes_every_endpoint() {
        let Json(body) = describe_endpoints().await;

        for key in [
            "GET /api",
            "GET /api/topics",
            "GET /api/articles",
            "GET /api/users",
            "GET /api/articles/:article_id",
            "PATCH /api/articles/:article_id",
            "GET /api/articles/:article_id/comments",
            "POST /api/articles/:article_id/comments",
            "DELETE /api/comments/:comment_id",
        ] {
            assert!(body.get(key).is_some(), "missing entry for {key}");
            assert!(body[key]["description"].is_string());
        }
    }

    #[tokio::test]
    async fn article_list_entry_names_its_queries() {
        let Json(body) = describe_endpoints().await;
        let queries = body["GET /api/articles"]["queries"].as_array().unwrap();
        assert!(queries.contains(&json!("topic")));
        assert!(queries.contains(&json!("sort_by")));
        assert!(queries.contains(&json!("order")));
    }
}
