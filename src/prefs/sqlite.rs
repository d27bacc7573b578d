//! SQLite-backed preferred-version store

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;
use tracing::{debug, info};

use crate::prefs::error::StoreError;
use crate::prefs::store::PreferredVersionStore;

/// Preferred-version store persisted in a SQLite database
///
/// One row per docs plugin instance; a selection replaces the previous row.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new(db_path: &Path) -> Result<Self, StoreError> {
        info!("Initializing preferences database at {:?}", db_path);

        let conn = Connection::open(db_path)?;

        // Enable WAL mode for better concurrency
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        let store = Self {
            conn: Mutex::new(conn),
        };

        store.create_schema()?;
        info!("Preferences store initialized");

        Ok(store)
    }

    /// Acquire database connection lock with proper error handling
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Get current timestamp in milliseconds since UNIX epoch
    fn current_timestamp_ms() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time before UNIX epoch")
            .as_millis() as i64
    }

    fn create_schema(&self) -> Result<(), StoreError> {
        let conn = self.lock_conn()?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS preferred_versions (
                plugin_id TEXT PRIMARY KEY,
                version_name TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )
            "#,
            [],
        )?;

        Ok(())
    }
}

impl PreferredVersionStore for SqliteStore {
    fn version_name(&self, plugin_id: &str) -> Result<Option<String>, StoreError> {
        let conn = self.lock_conn()?;
        let result = conn.query_row(
            "SELECT version_name FROM preferred_versions WHERE plugin_id = ?1",
            [plugin_id],
            |row| row.get(0),
        );

        match result {
            Ok(version_name) => Ok(Some(version_name)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_version_name(&self, plugin_id: &str, version_name: &str) -> Result<(), StoreError> {
        debug!(plugin_id, version_name, "saving preferred version");

        let now = Self::current_timestamp_ms();
        let conn = self.lock_conn()?;

        conn.execute(
            r#"
            INSERT INTO preferred_versions (plugin_id, version_name, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(plugin_id) DO UPDATE SET
                version_name = excluded.version_name,
                updated_at = excluded.updated_at
            "#,
            (plugin_id, version_name, now),
        )?;

        Ok(())
    }

    fn clear(&self, plugin_id: &str) -> Result<(), StoreError> {
        debug!(plugin_id, "clearing preferred version");

        let conn = self.lock_conn()?;
        conn.execute(
            "DELETE FROM preferred_versions WHERE plugin_id = ?1",
            [plugin_id],
        )?;

        Ok(())
    }
}
