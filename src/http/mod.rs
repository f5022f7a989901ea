//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS (the API is public and unauthenticated)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses in a uniform {"msg": ...} shape

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig};
