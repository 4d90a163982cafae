//! SQLite connection provider and schema management

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::Settings;
use crate::{PharmacyError, Result};

/// Hands out connections to the pharmacy database.
///
/// No connection is kept open between calls; each `connect` opens a fresh
/// handle which the caller drops when its statement is done.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    busy_timeout: Duration,
}

const CURRENT_SCHEMA_VERSION: i64 = 1;

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

impl Database {
    /// Open or create the database described by `settings`
    pub fn open(settings: &Settings) -> Result<Self> {
        let db_path = settings.database_path();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PharmacyError::storage("creating data directory", e))?;
        }

        let db = Self {
            path: db_path,
            busy_timeout: Duration::from_millis(settings.database.busy_timeout_ms),
        };
        db.initialize()?;

        Ok(db)
    }

    /// Open database at a specific path (useful for testing)
    pub fn open_path(path: &Path) -> Result<Self> {
        let db = Self {
            path: path.to_path_buf(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        };
        db.initialize()?;
        Ok(db)
    }

    /// Open a new connection to the database file
    pub fn connect(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(self.busy_timeout)?;
        Ok(conn)
    }

    /// Initialize database schema
    fn initialize(&self) -> Result<()> {
        let conn = self
            .connect()
            .map_err(|e| PharmacyError::storage("opening database", e))?;

        let current_version = schema_version(&conn)
            .map_err(|e| PharmacyError::storage("reading schema version", e))?;
        if current_version > CURRENT_SCHEMA_VERSION {
            return Err(PharmacyError::storage(
                "opening database",
                format!(
                    "schema version {} is newer than supported version {}",
                    current_version, CURRENT_SCHEMA_VERSION
                ),
            ));
        }

        if current_version < 1 {
            tracing::debug!(path = %self.path.display(), "migrating database to schema v1");
            migrate_to_v1(&conn)
                .and_then(|_| set_schema_version(&conn, 1))
                .map_err(|e| PharmacyError::storage("migrating database", e))?;
        }

        Ok(())
    }

    /// Current schema version tracked in PRAGMA user_version.
    pub fn schema_version(&self) -> Result<i64> {
        self.connect()
            .and_then(|conn| schema_version(&conn))
            .map_err(|e| PharmacyError::storage("reading schema version", e))
    }
}

fn schema_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
}

fn set_schema_version(conn: &Connection, version: i64) -> rusqlite::Result<()> {
    conn.execute_batch(&format!("PRAGMA user_version = {}", version))
}

fn migrate_to_v1(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS medicines (
            medicine_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            expiry_date TEXT,
            price REAL NOT NULL,
            stock INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_medicines_expiry_date
            ON medicines(expiry_date);
        "#,
    )
}
