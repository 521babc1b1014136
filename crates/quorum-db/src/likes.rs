//! Like repository: one row per (user, question) like.
//!
//! Uniqueness of the pair is a caller convention; the table carries no
//! UNIQUE constraint on it.

use std::sync::Arc;

use quorum_types::models::Like;
use tracing::debug;

use crate::row::Row;
use crate::{Database, StoreError};

const LIKES_DDL: &str = "
    CREATE TABLE IF NOT EXISTS likes (
        id           INTEGER PRIMARY KEY,
        user_id      INTEGER NOT NULL REFERENCES users(id),
        question_id  INTEGER NOT NULL,
        created_at   TEXT NOT NULL DEFAULT (datetime('now'))
    );

    CREATE INDEX IF NOT EXISTS idx_likes_question
        ON likes(question_id, created_at);
";

pub struct LikeRepository {
    db: Arc<Database>,
}

impl LikeRepository {
    pub fn new(db: Arc<Database>) -> Result<Self, StoreError> {
        db.ensure_table(LIKES_DDL)?;
        Ok(Self { db })
    }

    /// Records a like and returns it hydrated. An unknown `user_id` trips
    /// the foreign key and surfaces as `StoreError::Constraint`.
    pub fn create(&self, user_id: i64, question_id: i64) -> Result<Like, StoreError> {
        let rows = self.db.query(
            "INSERT INTO likes (user_id, question_id) VALUES (?1, ?2)
             RETURNING id, user_id, question_id, created_at",
            &[&user_id, &question_id],
        )?;
        let row = rows
            .first()
            .ok_or_else(|| StoreError::Execution("insert produced no row".into()))?;

        let like = hydrate(row)?;
        debug!(like_id = like.id, question_id, "recorded like");
        Ok(like)
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Like>, StoreError> {
        let rows = self.db.query(
            "SELECT id, user_id, question_id, created_at FROM likes WHERE id = ?1",
            &[&id],
        )?;
        rows.first().map(hydrate).transpose()
    }

    /// All likes for one question, oldest first.
    pub fn list_by_question(&self, question_id: i64) -> Result<Vec<Like>, StoreError> {
        let rows = self.db.query(
            "SELECT id, user_id, question_id, created_at
             FROM likes WHERE question_id = ?1
             ORDER BY created_at, id",
            &[&question_id],
        )?;
        rows.iter().map(hydrate).collect()
    }

    /// Returns whether a row was actually removed.
    pub fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let affected = self
            .db
            .execute("DELETE FROM likes WHERE id = ?1", &[&id])?;
        Ok(affected > 0)
    }
}

fn hydrate(row: &Row) -> Result<Like, StoreError> {
    Ok(Like {
        id: row.integer("id")?,
        user_id: row.integer("user_id")?,
        question_id: row.integer("question_id")?,
        created_at: row.datetime("created_at")?,
    })
}
