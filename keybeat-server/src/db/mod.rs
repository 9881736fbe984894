//! Database layer - connection pool, schema, and session stores
//!
//! The HTTP layer only ever sees `dyn SessionStore`; PostgreSQL and the
//! in-memory store are interchangeable behind it.

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
