//! newsdesk: a news REST API over PostgreSQL
//!
//! Exposes topics, articles, comments, and users with filtered and
//! sorted article listings, vote patching, and comment create/delete.
//! The query layer validates input before touching the store and builds
//! its one dynamic query from closed allow-lists only.

pub mod db;
pub mod http;
pub mod models;

pub use db::create_pool;
pub use http::{build_router, run_server, AppState, ServerConfig};
