//! User repository: owns the `users` table and the row → `User` hydration.

use std::sync::Arc;

use quorum_types::models::User;
use tracing::debug;

use crate::row::Row;
use crate::{Database, StoreError};

const USERS_DDL: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id             INTEGER PRIMARY KEY,
        name           TEXT NOT NULL UNIQUE,
        email          TEXT NOT NULL DEFAULT '',
        password_hash  TEXT NOT NULL,
        phone          TEXT,
        created_at     TEXT NOT NULL DEFAULT (datetime('now'))
    );
";

pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    /// Bootstraps the `users` table on the given store. Fails with
    /// `StoreError::Schema` before yielding a usable repository.
    pub fn new(db: Arc<Database>) -> Result<Self, StoreError> {
        db.ensure_table(USERS_DDL)?;
        Ok(Self { db })
    }

    /// Inserts a new user and returns it hydrated with the store-assigned
    /// id and creation timestamp. A taken name surfaces as
    /// `StoreError::Constraint` and leaves no row behind.
    pub fn create(&self, name: &str, password_hash: &str) -> Result<User, StoreError> {
        let rows = self.db.query(
            "INSERT INTO users (name, password_hash) VALUES (?1, ?2)
             RETURNING id, name, email, password_hash, phone, created_at",
            &[&name, &password_hash],
        )?;
        let row = rows
            .first()
            .ok_or_else(|| StoreError::Execution("insert produced no row".into()))?;

        let user = hydrate(row)?;
        debug!(user_id = user.id, "created user");
        Ok(user)
    }

    /// Exact-name lookup. Zero matches is `Ok(None)`, not an error.
    pub fn find_by_name(&self, name: &str) -> Result<Option<User>, StoreError> {
        let rows = self.db.query(
            "SELECT id, name, email, password_hash, phone, created_at
             FROM users WHERE name = ?1",
            &[&name],
        )?;
        rows.first().map(hydrate).transpose()
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let rows = self.db.query(
            "SELECT id, name, email, password_hash, phone, created_at
             FROM users WHERE id = ?1",
            &[&id],
        )?;
        rows.first().map(hydrate).transpose()
    }
}

fn hydrate(row: &Row) -> Result<User, StoreError> {
    Ok(User {
        id: row.integer("id")?,
        name: row.text("name")?,
        email: row.text("email")?,
        phone: row.opt_text("phone")?,
        password_hash: row.text("password_hash")?,
        created_at: row.datetime("created_at")?,
    })
}
