//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide note CRUD APIs over the `notes` table.
//! - Own the partial-update SQL (`IFNULL`) so an omitted field keeps its
//!   stored value.
//!
//! # Invariants
//! - `author_id` never appears in an UPDATE statement.
//! - `list_notes` returns rows in stable storage order (`note_id ASC`).
//! - Concurrent updates resolve by SQLite's statement-level atomicity;
//!   no optimistic concurrency control here.

use crate::error::AppResult;
use crate::model::note::{Note, NoteId};
use crate::model::user::UserId;
use rusqlite::{params, Connection, Row};

const NOTE_SELECT_SQL: &str = "SELECT
    note_id,
    title,
    content,
    author_id
FROM notes";

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Inserts a new note and returns its generated id.
    fn insert_note(&self, title: &str, content: &str, author_id: UserId) -> AppResult<NoteId>;
    /// Gets one note by id.
    fn get_note(&self, note_id: NoteId) -> AppResult<Option<Note>>;
    /// Lists all notes in storage order; tenant filtering happens above.
    fn list_notes(&self) -> AppResult<Vec<Note>>;
    /// Partially updates title/content; `None` keeps the stored value.
    /// Returns whether a row was changed.
    fn update_note(
        &self,
        note_id: NoteId,
        title: Option<&str>,
        content: Option<&str>,
    ) -> AppResult<bool>;
    /// Hard-deletes one note. Returns whether a row was removed.
    fn delete_note(&self, note_id: NoteId) -> AppResult<bool>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn insert_note(&self, title: &str, content: &str, author_id: UserId) -> AppResult<NoteId> {
        self.conn.execute(
            "INSERT INTO notes (title, content, author_id)
             VALUES (?1, ?2, ?3);",
            params![title, content, author_id],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_note(&self, note_id: NoteId) -> AppResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE note_id = ?1;"))?;

        let mut rows = stmt.query([note_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }

        Ok(None)
    }

    fn list_notes(&self) -> AppResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY note_id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok(notes)
    }

    fn update_note(
        &self,
        note_id: NoteId,
        title: Option<&str>,
        content: Option<&str>,
    ) -> AppResult<bool> {
        let changed = self.conn.execute(
            "UPDATE notes
             SET
                title = IFNULL(?2, title),
                content = IFNULL(?3, content)
             WHERE note_id = ?1;",
            params![note_id, title, content],
        )?;

        Ok(changed > 0)
    }

    fn delete_note(&self, note_id: NoteId) -> AppResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE note_id = ?1;", [note_id])?;

        Ok(changed > 0)
    }
}

fn parse_note_row(row: &Row<'_>) -> AppResult<Note> {
    Ok(Note {
        note_id: row.get("note_id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        author_id: row.get("author_id")?,
    })
}
