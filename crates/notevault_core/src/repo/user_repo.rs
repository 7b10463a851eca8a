//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide account persistence APIs over the `users` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `insert_user` returns the storage-generated `user_id`.
//! - Email lookups are exact (case-sensitive, as stored).
//! - Read paths reject invalid persisted role text instead of masking it.

use crate::error::{AppError, AppResult};
use crate::model::user::{Role, User, UserId};
use rusqlite::{params, Connection, Row};

const USER_SELECT_SQL: &str = "SELECT
    user_id,
    email,
    password_hash,
    role
FROM users";

/// Repository interface for account persistence.
pub trait UserRepository {
    /// Inserts a new account and returns its generated id.
    fn insert_user(&self, email: &str, password_hash: &str, role: Role) -> AppResult<UserId>;
    /// Finds one account by exact email match.
    fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn insert_user(&self, email: &str, password_hash: &str, role: Role) -> AppResult<UserId> {
        self.conn.execute(
            "INSERT INTO users (email, password_hash, role)
             VALUES (?1, ?2, ?3);",
            params![email, password_hash, role.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE email = ?1;"))?;

        let mut rows = stmt.query([email])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }
}

fn parse_user_row(row: &Row<'_>) -> AppResult<User> {
    let role_text: String = row.get("role")?;
    let role = Role::parse(&role_text).ok_or_else(|| {
        AppError::Internal(format!("invalid role value `{role_text}` in users.role"))
    })?;

    Ok(User {
        user_id: row.get("user_id")?,
        email: row.get("email")?,
        password_hash: row.get("password_hash")?,
        role,
    })
}
