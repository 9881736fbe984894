//! Schema creation for the session table

use sqlx::PgPool;

/// Table holding session records
pub const SESSION_TABLE: &str = "sessionresult";

/// Create the session table if it does not exist. Safe to run on every start.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!(table = SESSION_TABLE, "Running session migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sessionresult (
            id BIGSERIAL PRIMARY KEY,
            poem TEXT NOT NULL,
            wpm BIGINT NOT NULL,
            accuracy BIGINT NOT NULL,
            mistakes BIGINT NOT NULL,
            duration_sec BIGINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Session migrations complete");
    Ok(())
}
