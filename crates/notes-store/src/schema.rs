//! Schema definitions and creation utilities.
//!
//! The notes schema is embedded at compile time and applied idempotently on
//! every connect, before the server accepts any traffic.

use sqlx::SqlitePool;

use crate::error::{StoreError, StoreResult};

/// Embedded SQL for the notes table (001_notes.sql).
pub const NOTES_MIGRATION: &str = include_str!("../../../migrations/001_notes.sql");

/// Apply the notes schema to the database.
///
/// Idempotent: the embedded SQL only creates objects that do not exist yet.
pub async fn run_migrations(pool: &SqlitePool) -> StoreResult<()> {
    tracing::debug!("Applying notes schema (001_notes.sql)...");

    sqlx::raw_sql(NOTES_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::Migration(format!("notes schema failed: {e}")))?;

    tracing::info!("Notes schema ready");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the `notes` table exists.
pub async fn is_schema_initialized(pool: &SqlitePool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM sqlite_master
            WHERE type = 'table' AND name = 'notes'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}
