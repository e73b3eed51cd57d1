//! Database access layer for tasknote
//!
//! Opens the SQLite pool handed to the SQL repositories and bootstraps the
//! two tables. Bootstrap is idempotent (`CREATE TABLE IF NOT EXISTS`); there
//! is no versioned migration step.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tasknote_common::Result;
use tracing::info;

pub mod entities;
pub mod mappers;

pub use entities::{NewNoteRecord, NewTaskRecord, NoteRecord, StatusColumn, TaskRecord};
pub use mappers::Mapped;

/// Connect to `database_url` (e.g. `sqlite://tasknote.db?mode=rwc`) and create tables
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_millis(5000));

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    info!("Connected to database: {}", database_url);

    init_schema(&pool).await?;
    Ok(pool)
}

/// Private in-memory database for tests
///
/// A single connection is kept alive, since each SQLite in-memory connection
/// is its own database.
pub async fn connect_in_memory() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

/// Create `notes` and `tasks` if they do not exist
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    // AUTOINCREMENT keeps ids of deleted rows from being reissued
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            priority INTEGER,
            created_at TEXT NOT NULL,
            due_date TEXT,
            completed_at TEXT,
            status TEXT NOT NULL DEFAULT 'NEW'
                CHECK (status IN ('NEW', 'PENDING', 'COMPLETED', 'CANCELLED'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_bootstrap_is_idempotent() {
        let pool = connect_in_memory().await.expect("Should open in-memory database");
        init_schema(&pool).await.expect("Second bootstrap should succeed");

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('notes', 'tasks') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(tables, vec!["notes".to_string(), "tasks".to_string()]);
    }

    #[tokio::test]
    async fn test_connect_creates_database_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let db_path = dir.path().join("tasknote.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());

        let pool = connect(&url).await.expect("Should create database");
        assert!(db_path.exists(), "Database file was not created");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
