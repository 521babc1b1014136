use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered attendee. Hydrated from storage, so `id` and `created_at`
/// are always the store-assigned values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Never leaves the process over the wire.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// One user's like of one question. At most one per (user, question) pair
/// by convention; the store does not enforce the pair's uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: i64,
    pub user_id: i64,
    pub question_id: i64,
    pub created_at: DateTime<Utc>,
}
