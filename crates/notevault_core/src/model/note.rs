//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record shared by repo/service/api layers.
//!
//! # Invariants
//! - `note_id` is storage-generated and never reused.
//! - `author_id` references an existing user and is immutable after create.
//! - `title` is non-empty once it has passed the body pre-check.

use crate::model::user::UserId;
use serde::{Deserialize, Serialize};

/// Stable identifier for a note.
pub type NoteId = i64;

/// Persisted note record. Serializes with the four transport fields
/// (`note_id`, `title`, `content`, `author_id`) in snake_case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Storage-generated stable id.
    pub note_id: NoteId,
    /// Non-empty display title.
    pub title: String,
    /// Free-form body text.
    pub content: String,
    /// Owning user id; immutable after creation.
    pub author_id: UserId,
}
