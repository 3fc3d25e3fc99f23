//! Main store implementation for database operations.
//!
//! The `Store` type provides the fixed set of persistence operations for the
//! notes table. Each operation borrows the shared pool for the duration of
//! one call; the store holds no other state.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::{StoreError, StoreResult};
use crate::models::NoteRow;
use crate::schema;

/// Configuration for connecting to the database.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Database connection URL.
    pub database_url: String,
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
    /// Minimum number of connections to maintain.
    pub min_connections: u32,
    /// Apply the schema on connect.
    pub run_migrations: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://notes.db".to_string(),
            max_connections: 5,
            min_connections: 1,
            run_migrations: true,
        }
    }
}

impl StoreConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `DATABASE_URL` - Optional, defaults to `sqlite://notes.db`
    /// - `DATABASE_MAX_CONNECTIONS` - Optional, defaults to 5
    /// - `DATABASE_MIN_CONNECTIONS` - Optional, defaults to 1
    /// - `DATABASE_RUN_MIGRATIONS` - Optional, defaults to true
    pub fn from_env() -> StoreResult<Self> {
        let defaults = Self::default();

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or(defaults.database_url);

        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_connections);

        let min_connections = std::env::var("DATABASE_MIN_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.min_connections);

        let run_migrations = std::env::var("DATABASE_RUN_MIGRATIONS")
            .ok()
            .map(|s| s.to_lowercase() != "false" && s != "0")
            .unwrap_or(true);

        Ok(Self {
            database_url,
            max_connections,
            min_connections,
            run_migrations,
        })
    }

    /// Configuration for an in-memory database.
    ///
    /// A single held connection keeps the database alive for the lifetime of
    /// the pool. Tests substitute this for the file-backed store.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            run_migrations: true,
        }
    }
}

/// Database store for the notes service.
///
/// Cloning is cheap; clones share the underlying pool.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Connect to the database with the given configuration.
    ///
    /// Applies the schema before returning when `config.run_migrations` is
    /// true, so a connected store is always ready to serve operations.
    pub async fn connect(config: StoreConfig) -> StoreResult<Self> {
        tracing::info!(url = %config.database_url, "Connecting to database...");

        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| StoreError::Config(format!("invalid DATABASE_URL: {e}")))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database");

        if config.run_migrations {
            schema::run_migrations(&pool).await?;
        }

        Ok(Self { pool })
    }

    /// Create a store from an existing connection pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a new note.
    ///
    /// Fails with [`StoreError::DuplicateContent`] when a note with the same
    /// content already exists.
    pub async fn insert_note(&self, content: &str) -> StoreResult<NoteRow> {
        sqlx::query_as::<_, NoteRow>(
            r#"
            INSERT INTO notes (content)
            VALUES ($1)
            RETURNING id, content
            "#,
        )
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                StoreError::DuplicateContent(content.to_string())
            } else {
                StoreError::Connection(e)
            }
        })
    }

    /// List all notes in insertion order.
    pub async fn list_notes(&self) -> StoreResult<Vec<NoteRow>> {
        Ok(
            sqlx::query_as::<_, NoteRow>(r#"SELECT id, content FROM notes ORDER BY id"#)
                .fetch_all(&self.pool)
                .await?,
        )
    }

    /// Delete all notes. Succeeds on an empty table.
    ///
    /// Returns the number of rows removed.
    pub async fn delete_all_notes(&self) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM notes").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Get a note by id.
    ///
    /// Absence is reported as [`StoreError::NoteNotFound`], distinguishable
    /// from driver failures.
    pub async fn get_note(&self, id: i64) -> StoreResult<NoteRow> {
        sqlx::query_as::<_, NoteRow>(r#"SELECT id, content FROM notes WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NoteNotFound(id))
    }

    /// Delete a note by id.
    ///
    /// Removes zero or one row; deleting an absent id is a no-op success.
    /// Returns the number of rows removed.
    pub async fn delete_note(&self, id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.min_connections, 1);
        assert!(config.run_migrations);
    }

    #[test]
    fn config_in_memory_holds_one_connection() {
        let config = StoreConfig::in_memory();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.min_connections, 1);
    }
}
