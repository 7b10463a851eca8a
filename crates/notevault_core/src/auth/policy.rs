//! Authorization policy.
//!
//! # Responsibility
//! - Decide ALLOW/DENY as pure functions over identity and resource.
//!
//! # Invariants
//! - No I/O; decisions depend only on the arguments.
//! - ADMIN bypasses every per-resource ownership check.
//! - Callers check existence before ownership: a missing note must already
//!   have surfaced as `NotFound` before these predicates run.

use crate::error::{AppError, AppResult};
use crate::model::identity::Identity;
use crate::model::note::Note;

/// Allows any successfully resolved identity.
///
/// Resolution failure already stopped the pipeline, so this always passes;
/// it exists so call sites state their requirement explicitly.
pub fn require_authenticated(_identity: &Identity) -> AppResult<()> {
    Ok(())
}

/// Allows only ADMIN identities.
pub fn require_admin(identity: &Identity) -> AppResult<()> {
    if identity.role.is_admin() {
        Ok(())
    } else {
        Err(AppError::UnauthorizedAccess(
            "You do not have access.".to_string(),
        ))
    }
}

/// Read access: owner or ADMIN.
pub fn check_note_access(note: &Note, identity: &Identity) -> AppResult<()> {
    if identity.role.is_admin() || note.author_id == identity.user_id {
        Ok(())
    } else {
        Err(AppError::UnauthorizedAccess(
            "You do not have access to this note".to_string(),
        ))
    }
}

/// Write/delete access: owner or ADMIN.
pub fn check_ownership(note: &Note, identity: &Identity) -> AppResult<()> {
    if identity.role.is_admin() || note.author_id == identity.user_id {
        Ok(())
    } else {
        Err(AppError::UnauthorizedAccess(
            "You are not the owner of this note".to_string(),
        ))
    }
}
