//! Note use-case service: per-tenant CRUD with ownership enforcement.
//!
//! # Responsibility
//! - Resolve the caller's identity, apply the authorization policy, and
//!   delegate persistence to the note repository.
//!
//! # Invariants
//! - Every operation resolves its identity through the token codec first;
//!   resolution failure short-circuits with `BadToken`.
//! - Existence is checked strictly before ownership: a non-existent note
//!   is `NotFound` for every role, never `UnauthorizedAccess`.
//! - `update` keeps any field passed as `None` unchanged.
//! - `delete` returns the pre-delete snapshot.

use crate::auth::policy::{check_note_access, check_ownership};
use crate::auth::token::TokenCodec;
use crate::error::{AppError, AppResult};
use crate::model::identity::Identity;
use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::NoteRepository;
use log::info;

/// Note service facade over a note repository and token codec.
pub struct NoteService<R: NoteRepository> {
    repo: R,
    codec: TokenCodec,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository and codec.
    pub fn new(repo: R, codec: TokenCodec) -> Self {
        Self { repo, codec }
    }

    /// Lists notes visible to the caller: everything for ADMIN, own notes
    /// otherwise. Rows keep storage order.
    pub fn list(&self, token: Option<&str>) -> AppResult<Vec<Note>> {
        let identity = self.codec.resolve(token)?;

        let mut notes = self.repo.list_notes()?;
        if !identity.role.is_admin() {
            notes.retain(|note| note.author_id == identity.user_id);
        }

        Ok(notes)
    }

    /// Gets one note by id, enforcing read access.
    pub fn get(&self, token: Option<&str>, note_id: NoteId) -> AppResult<Note> {
        let identity = self.codec.resolve(token)?;
        self.fetch_accessible(&identity, note_id)
    }

    /// Creates a note owned by the caller and returns the stored row.
    ///
    /// # Contract
    /// - `title` has already passed the body pre-check (non-empty, trimmed).
    /// - The returned shape matches `get` (re-fetched by id).
    pub fn create(&self, token: Option<&str>, title: &str, content: &str) -> AppResult<Note> {
        let identity = self.codec.resolve(token)?;

        let note_id = self.repo.insert_note(title, content, identity.user_id)?;
        info!(
            "event=note_created module=note status=ok note_id={note_id} author_id={}",
            identity.user_id
        );

        self.read_back(note_id, "created note not found in read-back")
    }

    /// Partially updates a note and returns the stored row.
    pub fn update(
        &self,
        token: Option<&str>,
        note_id: NoteId,
        title: Option<&str>,
        content: Option<&str>,
    ) -> AppResult<Note> {
        let identity = self.codec.resolve(token)?;

        // Existence first: NotFound must win over any ownership outcome.
        let note = self.fetch_accessible(&identity, note_id)?;
        check_ownership(&note, &identity)?;

        self.repo.update_note(note_id, title, content)?;
        info!("event=note_updated module=note status=ok note_id={note_id}");

        self.read_back(note_id, "updated note not found in read-back")
    }

    /// Deletes a note and returns its pre-delete snapshot.
    pub fn delete(&self, token: Option<&str>, note_id: NoteId) -> AppResult<Note> {
        let identity = self.codec.resolve(token)?;

        let note = self.fetch_accessible(&identity, note_id)?;
        check_ownership(&note, &identity)?;

        self.repo.delete_note(note_id)?;
        info!("event=note_deleted module=note status=ok note_id={note_id}");

        Ok(note)
    }

    fn fetch_accessible(&self, identity: &Identity, note_id: NoteId) -> AppResult<Note> {
        let note = self
            .repo
            .get_note(note_id)?
            .ok_or_else(|| AppError::NotFound("Note not found".to_string()))?;

        check_note_access(&note, identity)?;
        Ok(note)
    }

    fn read_back(&self, note_id: NoteId, context: &str) -> AppResult<Note> {
        self.repo
            .get_note(note_id)?
            .ok_or_else(|| AppError::Internal(context.to_string()))
    }
}
