//! Session store trait and PostgreSQL repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewSession, SessionRecord};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    /// The database could not be reached at all
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => Self::Unavailable(e.to_string()),
            _ => Self::Sqlx(e),
        }
    }
}

/// Append-only access to session records.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Persist a new record, returning it with its assigned id.
    async fn create(&self, input: NewSession) -> Result<SessionRecord, StoreError>;

    /// Every stored record, ordered by id descending.
    async fn list_all(&self) -> Result<Vec<SessionRecord>, StoreError>;
}

/// PostgreSQL-backed session store
#[derive(Clone)]
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn create(&self, input: NewSession) -> Result<SessionRecord, StoreError> {
        let record: SessionRecord = sqlx::query_as(
            r#"
            INSERT INTO sessionresult (poem, wpm, accuracy, mistakes, duration_sec)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, poem, wpm, accuracy, mistakes, duration_sec
            "#,
        )
        .bind(&input.poem)
        .bind(input.wpm)
        .bind(input.accuracy)
        .bind(input.mistakes)
        .bind(input.duration_sec)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<SessionRecord>, StoreError> {
        let records = sqlx::query_as::<_, SessionRecord>(
            r#"
            SELECT id, poem, wpm, accuracy, mistakes, duration_sec
            FROM sessionresult
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
