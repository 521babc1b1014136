//! Generic row mapping: the contract boundary between the engine and the
//! repositories.
//!
//! Every value crosses the boundary in textual form, with SQL NULL kept
//! distinct from the empty string. Repositories coerce back to typed fields
//! through the accessors below; a failed coercion means the stored data no
//! longer matches the schema this code expects, which is `StoreError::Corrupt`
//! territory rather than a normal runtime condition.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::types::ValueRef;

use crate::error::StoreError;

/// SQLite's `datetime('now')` output.
const SQLITE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One result row: column name → textual value, `None` for SQL NULL.
#[derive(Debug, Clone)]
pub struct Row {
    values: HashMap<String, Option<String>>,
}

impl Row {
    pub(crate) fn new(values: HashMap<String, Option<String>>) -> Self {
        Self { values }
    }

    fn raw(&self, column: &str) -> Result<Option<&str>, StoreError> {
        match self.values.get(column) {
            Some(value) => Ok(value.as_deref()),
            None => Err(StoreError::Corrupt(format!(
                "column {column} missing from result row"
            ))),
        }
    }

    /// Non-null text. NULL in a column expected non-null is corruption.
    pub fn text(&self, column: &str) -> Result<String, StoreError> {
        self.raw(column)?
            .map(str::to_owned)
            .ok_or_else(|| StoreError::Corrupt(format!("column {column} is unexpectedly NULL")))
    }

    /// Nullable text; `None` means the stored value was SQL NULL.
    pub fn opt_text(&self, column: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(column)?.map(str::to_owned))
    }

    pub fn integer(&self, column: &str) -> Result<i64, StoreError> {
        let text = self.text(column)?;
        text.parse().map_err(|_| {
            StoreError::Corrupt(format!("column {column} holds non-integer value {text:?}"))
        })
    }

    /// Parses the store's `datetime('now')` format, falling back to RFC 3339
    /// for rows written by older tooling.
    pub fn datetime(&self, column: &str) -> Result<DateTime<Utc>, StoreError> {
        let text = self.text(column)?;
        if let Ok(naive) = NaiveDateTime::parse_from_str(&text, SQLITE_DATETIME_FORMAT) {
            return Ok(naive.and_utc());
        }
        DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| {
                StoreError::Corrupt(format!("column {column} holds unparseable timestamp {text:?}"))
            })
    }
}

/// Collapses an engine value to its textual form. Type information is lost
/// here on purpose; the repositories restore it at their edge.
pub(crate) fn textualize(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(r) => Some(r.to_string()),
        ValueRef::Text(t) => Some(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Some(hex::encode(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, Option<&str>)]) -> Row {
        Row::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.map(str::to_owned)))
                .collect(),
        )
    }

    #[test]
    fn null_is_distinct_from_empty_string() {
        let row = row(&[("phone", None), ("email", Some(""))]);
        assert_eq!(row.opt_text("phone").unwrap(), None);
        assert_eq!(row.opt_text("email").unwrap(), Some(String::new()));
        assert_eq!(row.text("email").unwrap(), "");
        assert!(matches!(row.text("phone"), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn missing_column_is_corruption() {
        let row = row(&[("id", Some("1"))]);
        assert!(matches!(row.text("name"), Err(StoreError::Corrupt(_))));
        assert!(matches!(row.opt_text("name"), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn integer_coercion() {
        let row = row(&[("id", Some("42")), ("bad", Some("forty-two"))]);
        assert_eq!(row.integer("id").unwrap(), 42);
        assert!(matches!(row.integer("bad"), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn datetime_accepts_sqlite_and_rfc3339_forms() {
        let row = row(&[
            ("a", Some("2026-08-31 12:30:00")),
            ("b", Some("2026-08-31T12:30:00+00:00")),
            ("bad", Some("yesterday")),
        ]);
        assert_eq!(row.datetime("a").unwrap(), row.datetime("b").unwrap());
        assert!(matches!(row.datetime("bad"), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn textualize_keeps_null_and_stringifies_the_rest() {
        assert_eq!(textualize(ValueRef::Null), None);
        assert_eq!(textualize(ValueRef::Integer(7)), Some("7".into()));
        assert_eq!(textualize(ValueRef::Text(b"alice")), Some("alice".into()));
        assert_eq!(textualize(ValueRef::Blob(&[0xde, 0xad])), Some("dead".into()));
    }
}
