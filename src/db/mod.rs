//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One shared connection pool, no Arc<Mutex<Connection>>
//! - The article list uses a JOIN + aggregate, no N+1 comment counting
//! - Writes rely on DB constraints; violations are translated, not
//!   pre-checked with SELECTs
//! - Identifier interpolation only from the models allow-lists; all
//!   values go through bind parameters

pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
