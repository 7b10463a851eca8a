//! Resolved request identity.
//!
//! # Responsibility
//! - Carry the trusted claims of one request after token resolution.
//!
//! # Invariants
//! - Only `auth::token::TokenCodec::resolve` constructs identities from
//!   external input; everything downstream may trust the fields as-is.
//! - An `Identity` lives for a single request and is never persisted.

use crate::model::user::{Role, UserId};

/// Trusted identity derived from a verified credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Authenticated user id.
    pub user_id: UserId,
    /// Privilege tier carried by the credential.
    pub role: Role,
    /// Credential subject (the account email).
    pub subject: String,
}
