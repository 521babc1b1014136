//! SQLite error mapping.
//!
//! Engine errors are folded into the `StoreError` taxonomy here, in one
//! place, so repositories never match on `rusqlite::Error` themselves.
//! Constraint violations get their own variant so callers can answer
//! "already exists" instead of a generic failure.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file could not be opened, or the handle is gone.
    /// Fatal to the owning repository; surfaced at process startup.
    #[error("store connection failed: {0}")]
    Connection(String),

    /// A statement failed. Recoverable per call; carries the engine's
    /// diagnostic text.
    #[error("statement failed: {0}")]
    Execution(String),

    /// A uniqueness or foreign-key violation, distinguished from
    /// `Execution` so the caller can map it to a conflict response.
    #[error("constraint violated: {0}")]
    Constraint(String),

    /// Bootstrap DDL failed. Fatal at repository construction.
    #[error("schema bootstrap failed: {0}")]
    Schema(String),

    /// A stored value failed typed coercion. Indicates schema drift or
    /// out-of-band edits to the store file, not a normal runtime condition.
    #[error("stored data corrupt: {0}")]
    Corrupt(String),
}

/// Maps a rusqlite error to a `StoreError`.
///
/// - constraint violations (unique, primary key, foreign key) → `Constraint`
/// - `CannotOpen` → `Connection`
/// - everything else → `Execution`
///
/// `QueryReturnedNoRows` deliberately has no mapping of its own: zero rows
/// is a value, not an error, and the query path materializes result sets
/// without ever raising it.
pub(crate) fn map_engine_error(err: &rusqlite::Error) -> StoreError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            StoreError::Constraint(err.to_string())
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            StoreError::Connection(err.to_string())
        }

        _ => StoreError::Execution(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    fn sqlite_failure(code: rusqlite::ErrorCode, extended_code: i32) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(
            ffi::Error {
                code,
                extended_code,
            },
            None,
        )
    }

    #[test]
    fn unique_violation_maps_to_constraint() {
        let err = sqlite_failure(
            rusqlite::ErrorCode::ConstraintViolation,
            ffi::SQLITE_CONSTRAINT_UNIQUE,
        );
        assert!(matches!(map_engine_error(&err), StoreError::Constraint(_)));
    }

    #[test]
    fn foreign_key_violation_maps_to_constraint() {
        let err = sqlite_failure(
            rusqlite::ErrorCode::ConstraintViolation,
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
        );
        assert!(matches!(map_engine_error(&err), StoreError::Constraint(_)));
    }

    #[test]
    fn cannot_open_maps_to_connection() {
        let err = sqlite_failure(rusqlite::ErrorCode::CannotOpen, ffi::SQLITE_CANTOPEN);
        assert!(matches!(map_engine_error(&err), StoreError::Connection(_)));
    }

    #[test]
    fn other_engine_errors_map_to_execution() {
        let err = sqlite_failure(rusqlite::ErrorCode::DatabaseBusy, ffi::SQLITE_BUSY);
        assert!(matches!(map_engine_error(&err), StoreError::Execution(_)));

        let err = rusqlite::Error::QueryReturnedNoRows;
        assert!(matches!(map_engine_error(&err), StoreError::Execution(_)));
    }
}
