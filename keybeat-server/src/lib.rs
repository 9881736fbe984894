//! keybeat-server: storage and HTTP API for typing-practice results
//!
//! Records finished sessions (poem, speed, accuracy, mistakes, duration)
//! and serves them back newest first, one page at a time.

pub mod db;
pub mod http;
pub mod models;

pub use db::{MemorySessionStore, PgSessionStore, SessionStore, StoreError};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::{paginate, NewSession, Paginated, Pagination, SessionRecord};
