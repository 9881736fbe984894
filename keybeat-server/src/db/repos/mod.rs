//! Session store implementations
//!
//! Each store follows these rules:
//! - ids are assigned by the store, in creation order
//! - records are append-only (no update, no delete)
//! - `list_all` returns every record, newest (highest id) first

pub mod memory;
pub mod sessions;

pub use memory::MemorySessionStore;
pub use sessions::{PgSessionStore, SessionStore, StoreError};
