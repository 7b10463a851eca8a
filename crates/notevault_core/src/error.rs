//! Canonical failure taxonomy and transport-status mapping.
//!
//! # Responsibility
//! - Define the closed set of typed failures every core operation returns.
//! - Own the single error-kind -> transport-status table.
//! - Emit the central failure log side channel.
//!
//! # Invariants
//! - Every operation fails with exactly one `AppError`; no partial success.
//! - Higher layers never re-interpret a kind; they map it verbatim.
//! - Logging a failure never changes the failure.

use crate::db::DbError;
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AppResult<T> = Result<T, AppError>;

/// Closed failure taxonomy carried by every fallible core operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A required input field is empty or absent.
    FieldMissing(String),
    /// An input field is present but fails validation.
    FieldInvalid(String),
    /// The addressed resource does not exist.
    NotFound(String),
    /// A uniqueness constraint would be violated.
    UniqueConflict(String),
    /// The caller is authenticated but not allowed.
    UnauthorizedAccess(String),
    /// The presented credential is missing, malformed, tampered or expired.
    BadToken(String),
    /// Unclassified internal failure (storage, hashing, signing).
    Internal(String),
}

impl AppError {
    /// Transport status for this kind. This table is authoritative; no
    /// other code path decides a status.
    pub fn status(&self) -> u16 {
        match self {
            Self::FieldMissing(_) | Self::FieldInvalid(_) => 400,
            Self::NotFound(_) => 404,
            Self::UniqueConflict(_) => 409,
            Self::UnauthorizedAccess(_) => 403,
            Self::BadToken(_) => 401,
            Self::Internal(_) => 500,
        }
    }

    /// Stable kind label used by the failure log.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FieldMissing(_) => "field_missing",
            Self::FieldInvalid(_) => "field_invalid",
            Self::NotFound(_) => "not_found",
            Self::UniqueConflict(_) => "unique_conflict",
            Self::UnauthorizedAccess(_) => "unauthorized_access",
            Self::BadToken(_) => "bad_token",
            Self::Internal(_) => "internal",
        }
    }

    /// User-facing message text.
    pub fn message(&self) -> &str {
        match self {
            Self::FieldMissing(msg)
            | Self::FieldInvalid(msg)
            | Self::NotFound(msg)
            | Self::UniqueConflict(msg)
            | Self::UnauthorizedAccess(msg)
            | Self::BadToken(msg)
            | Self::Internal(msg) => msg,
        }
    }

    /// Whether the caller must discard its stored credential.
    pub fn discards_credential(&self) -> bool {
        matches!(self, Self::BadToken(_))
    }

    /// Writes this failure to the central log side channel.
    ///
    /// # Side effects
    /// - Emits one `request_failed` event; never alters the error.
    pub fn log(&self) {
        error!(
            "event=request_failed module=core status=error kind={} http_status={} message={}",
            self.kind(),
            self.status(),
            self.message()
        );
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Error for AppError {}

impl From<DbError> for AppError {
    fn from(value: DbError) -> Self {
        Self::Internal(value.to_string())
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Internal(value.to_string())
    }
}
