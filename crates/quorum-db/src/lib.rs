pub mod error;
pub mod likes;
pub mod row;
pub mod users;

pub use error::StoreError;
pub use likes::LikeRepository;
pub use row::Row;
pub use users::UserRepository;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::{Connection, ToSql};
use tracing::info;

use crate::error::map_engine_error;
use crate::row::textualize;

/// Exclusive handle to the embedded SQLite store.
///
/// Exactly one connection, guarded by a mutex: same-process callers are
/// serialized here, cross-process contention is left to SQLite's own file
/// locking. Every call blocks until the engine answers; the busy timeout
/// bounds waits on a locked store.
pub struct Database {
    conn: Mutex<Option<Connection>>,
}

impl Database {
    /// Opens (creating if absent) the store file at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn =
            Connection::open(path).map_err(|e| StoreError::Connection(e.to_string()))?;
        Self::configure(conn, &path.display().to_string())
    }

    /// In-memory store, gone when the handle drops. Test use.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Connection(e.to_string()))?;
        Self::configure(conn, ":memory:")
    }

    fn configure(conn: Connection, label: &str) -> Result<Self, StoreError> {
        // WAL mode for concurrent readers
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| map_engine_error(&e))?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| map_engine_error(&e))?;
        conn.busy_timeout(Duration::from_secs(5))
            .map_err(|e| map_engine_error(&e))?;

        info!("database opened at {label}");
        Ok(Self {
            conn: Mutex::new(Some(conn)),
        })
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let guard = self
            .conn
            .lock()
            .map_err(|_| StoreError::Connection("connection lock poisoned".into()))?;
        match guard.as_ref() {
            Some(conn) => f(conn),
            None => Err(StoreError::Connection("connection is closed".into())),
        }
    }

    /// Releases the connection. No-op when already closed; later calls on
    /// this handle fail with `StoreError::Connection`.
    pub fn close(&self) -> Result<(), StoreError> {
        let mut guard = self
            .conn
            .lock()
            .map_err(|_| StoreError::Connection("connection lock poisoned".into()))?;
        if let Some(conn) = guard.take() {
            conn.close().map_err(|(_, e)| map_engine_error(&e))?;
        }
        Ok(())
    }

    /// Runs a statement that produces no result set (DDL, INSERT, UPDATE,
    /// DELETE). Returns the number of affected rows. Values bind through
    /// placeholders only; SQL text never carries caller data.
    pub fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> Result<usize, StoreError> {
        self.with_conn(|conn| conn.execute(sql, params).map_err(|e| map_engine_error(&e)))
    }

    /// Runs a statement that produces a result set and materializes it fully.
    /// Zero matching rows is an empty `Vec`, never an error.
    pub fn query(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<Row>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(sql).map_err(|e| map_engine_error(&e))?;
            let columns: Vec<String> =
                stmt.column_names().iter().map(|c| c.to_string()).collect();

            let mut rows = stmt.query(params).map_err(|e| map_engine_error(&e))?;
            let mut out = Vec::new();
            while let Some(row) = rows.next().map_err(|e| map_engine_error(&e))? {
                let mut values = HashMap::with_capacity(columns.len());
                for (idx, name) in columns.iter().enumerate() {
                    let value = row.get_ref(idx).map_err(|e| map_engine_error(&e))?;
                    values.insert(name.clone(), textualize(value));
                }
                out.push(Row::new(values));
            }
            Ok(out)
        })
    }

    /// Cheap liveness probe for health checks.
    pub fn ping(&self) -> Result<(), StoreError> {
        self.query("SELECT 1", &[]).map(|_| ())
    }

    /// Idempotent table bootstrap (`CREATE TABLE IF NOT EXISTS` DDL).
    /// Failures surface as `StoreError::Schema`.
    pub fn ensure_table(&self, ddl: &str) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            conn.execute_batch(ddl)
                .map_err(|e| StoreError::Schema(e.to_string()))
        })
    }
}
