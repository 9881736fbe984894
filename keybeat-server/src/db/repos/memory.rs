//! In-memory session store
//!
//! Used by tests and by `keybeat serve --in-memory`. Nothing survives a
//! restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::sessions::{SessionStore, StoreError};
use crate::models::{NewSession, SessionRecord};

/// Vec-backed store; records are kept in insertion (id ascending) order.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    records: RwLock<Vec<SessionRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, input: NewSession) -> Result<SessionRecord, StoreError> {
        let mut records = self.records.write().await;
        // Append-only, so the last id is the highest.
        let id = records.last().map_or(1, |r| r.id + 1);
        let record = input.into_record(id);
        records.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<SessionRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().rev().cloned().collect())
    }
}
