//! Transport-facing boundary: response envelope, credential lifecycle and
//! the note body pre-check.
//!
//! # Responsibility
//! - Wrap service calls into `{status, message?, data?}` envelopes with the
//!   authoritative kind -> status mapping applied at exactly one place.
//! - Model credential side effects (set/clear) transport-agnostically.
//! - Pre-check note bodies before they reach the note service.
//!
//! # Invariants
//! - Failures are logged to the side channel here, then mapped verbatim;
//!   no endpoint re-interprets an error kind.
//! - Every `BadToken` failure instructs the caller to discard the stored
//!   credential.
//! - Titles and contents are trimmed before the service sees them.

use crate::error::{AppError, AppResult};
use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::NoteRepository;
use crate::repo::user_repo::UserRepository;
use crate::service::account_service::AccountService;
use crate::service::note_service::NoteService;
use serde::Serialize;

/// Response envelope mirrored onto the transport as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Transport status from the authoritative mapping table.
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Credential side effect the transport must apply with the response.
///
/// `Set` and `Clear` model set-cookie/clear-cookie in the original
/// deployment; any bearer transport works the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialAction {
    /// Store this token and present it on subsequent protected calls.
    Set(String),
    /// Discard the stored token.
    Clear,
    /// Leave the stored token untouched.
    Keep,
}

/// One endpoint outcome: envelope plus credential side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply<T: Serialize> {
    pub response: ApiResponse<T>,
    pub credential: CredentialAction,
}

/// Registers an account. 201 on success, credential set.
pub fn register<R: UserRepository>(
    accounts: &AccountService<R>,
    email: &str,
    password: &str,
) -> ApiReply<()> {
    match accounts.register(email, password) {
        Ok(token) => reply(
            201,
            Some("User successfully created"),
            None,
            CredentialAction::Set(token),
        ),
        Err(err) => fail(err),
    }
}

/// Authenticates an account. 200 on success, credential set.
pub fn login<R: UserRepository>(
    accounts: &AccountService<R>,
    email: &str,
    password: &str,
) -> ApiReply<()> {
    match accounts.login(email, password) {
        Ok(token) => reply(
            200,
            Some("User successfully logged in"),
            None,
            CredentialAction::Set(token),
        ),
        Err(err) => fail(err),
    }
}

/// Clears the stored credential. Always succeeds.
pub fn logout() -> ApiReply<()> {
    reply(
        200,
        Some("User successfully logged out"),
        None,
        CredentialAction::Clear,
    )
}

/// Lists the caller's visible notes.
pub fn list_notes<R: NoteRepository>(
    notes: &NoteService<R>,
    token: Option<&str>,
) -> ApiReply<Vec<Note>> {
    match notes.list(token) {
        Ok(items) => reply(200, None, Some(items), CredentialAction::Keep),
        Err(err) => fail(err),
    }
}

/// Gets one note by id.
pub fn get_note<R: NoteRepository>(
    notes: &NoteService<R>,
    token: Option<&str>,
    note_id: NoteId,
) -> ApiReply<Note> {
    match notes.get(token, note_id) {
        Ok(note) => reply(200, None, Some(note), CredentialAction::Keep),
        Err(err) => fail(err),
    }
}

/// Creates a note after the body pre-check.
pub fn create_note<R: NoteRepository>(
    notes: &NoteService<R>,
    token: Option<&str>,
    title: Option<&str>,
    content: Option<&str>,
) -> ApiReply<Note> {
    let result = check_create_body(title, content)
        .and_then(|(title, content)| notes.create(token, &title, &content));

    match result {
        Ok(note) => reply(
            201,
            Some("Note successfully created"),
            Some(note),
            CredentialAction::Keep,
        ),
        Err(err) => fail(err),
    }
}

/// Partially updates a note after the body pre-check.
pub fn update_note<R: NoteRepository>(
    notes: &NoteService<R>,
    token: Option<&str>,
    note_id: NoteId,
    title: Option<&str>,
    content: Option<&str>,
) -> ApiReply<Note> {
    let result = check_update_body(title, content).and_then(|(title, content)| {
        notes.update(token, note_id, title.as_deref(), content.as_deref())
    });

    match result {
        Ok(note) => reply(
            200,
            Some("Note successfully updated"),
            Some(note),
            CredentialAction::Keep,
        ),
        Err(err) => fail(err),
    }
}

/// Deletes a note, returning its pre-delete snapshot.
pub fn delete_note<R: NoteRepository>(
    notes: &NoteService<R>,
    token: Option<&str>,
    note_id: NoteId,
) -> ApiReply<Note> {
    match notes.delete(token, note_id) {
        Ok(note) => reply(
            200,
            Some("Note successfully deleted"),
            Some(note),
            CredentialAction::Keep,
        ),
        Err(err) => fail(err),
    }
}

/// Body pre-check for note creation: title required, both fields trimmed.
pub fn check_create_body(
    title: Option<&str>,
    content: Option<&str>,
) -> AppResult<(String, String)> {
    let title = require_title(title)?;
    let content = content.unwrap_or_default().trim().to_string();
    Ok((title, content))
}

/// Body pre-check for note updates: an absent title passes through for
/// partial-update semantics, a present-but-blank title is rejected.
pub fn check_update_body(
    title: Option<&str>,
    content: Option<&str>,
) -> AppResult<(Option<String>, Option<String>)> {
    let title = match title {
        Some(value) => Some(require_title(Some(value))?),
        None => None,
    };
    let content = content.map(|value| value.trim().to_string());
    Ok((title, content))
}

fn require_title(title: Option<&str>) -> AppResult<String> {
    let trimmed = title.unwrap_or_default().trim();
    if trimmed.is_empty() {
        return Err(AppError::FieldMissing("Title is required".to_string()));
    }
    Ok(trimmed.to_string())
}

fn reply<T: Serialize>(
    status: u16,
    message: Option<&str>,
    data: Option<T>,
    credential: CredentialAction,
) -> ApiReply<T> {
    ApiReply {
        response: ApiResponse {
            status,
            message: message.map(str::to_string),
            data,
        },
        credential,
    }
}

fn fail<T: Serialize>(err: AppError) -> ApiReply<T> {
    err.log();

    let credential = if err.discards_credential() {
        CredentialAction::Clear
    } else {
        CredentialAction::Keep
    };

    ApiReply {
        response: ApiResponse {
            status: err.status(),
            message: Some(err.message().to_string()),
            data: None,
        },
        credential,
    }
}
