//! User account model and privilege roles.
//!
//! # Responsibility
//! - Define the persisted account record shape.
//! - Define the two-tier role enum used by the authorization policy.
//!
//! # Invariants
//! - `user_id` is storage-generated and never reused.
//! - `role` defaults to `Role::User`; promotion happens only out-of-band.
//! - `password_hash` never leaves the core (no serde on `User`).

use serde::{Deserialize, Serialize};

/// Stable identifier for a user account.
pub type UserId = i64;

/// Flat privilege tier. `Admin` bypasses per-resource ownership checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Canonical storage/claim text for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Parses the canonical storage/claim text back into a role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "USER" => Some(Self::User),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Returns whether this role carries the admin override.
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Persisted account record.
///
/// Intentionally not serializable: `password_hash` must never reach a
/// transport boundary. Response shapes are built from `Note` and token
/// material only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Storage-generated stable id.
    pub user_id: UserId,
    /// Unique, stored case-sensitively.
    pub email: String,
    /// Opaque one-way PHC-format hash.
    pub password_hash: String,
    /// Privilege tier; `User` unless promoted out-of-band.
    pub role: Role,
}
