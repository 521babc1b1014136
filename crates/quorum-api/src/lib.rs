pub mod auth;
pub mod health;
pub mod likes;
pub mod middleware;

use axum::http::StatusCode;
use quorum_db::StoreError;
use tracing::error;

/// Maps a persistence failure to a transport status. Constraint violations
/// are the one recoverable case callers can act on; everything else is a
/// server-side fault.
pub fn store_error_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::Constraint(_) => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `map_err` adapter for handlers: log the store error, answer with the
/// mapped status.
pub(crate) fn log_store_error(err: StoreError) -> StatusCode {
    let status = store_error_status(&err);
    error!("store error: {err}");
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_maps_to_conflict() {
        let err = StoreError::Constraint("UNIQUE constraint failed: users.name".into());
        assert_eq!(store_error_status(&err), StatusCode::CONFLICT);
    }

    #[test]
    fn other_store_errors_map_to_internal() {
        for err in [
            StoreError::Connection("closed".into()),
            StoreError::Execution("syntax error".into()),
            StoreError::Schema("bad ddl".into()),
            StoreError::Corrupt("bad timestamp".into()),
        ] {
            assert_eq!(store_error_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
