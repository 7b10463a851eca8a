//! Password hashing and verification.
//!
//! # Responsibility
//! - Provide the opaque one-way hash function used by account flows.
//!
//! # Invariants
//! - Hashes are salted PHC-format strings; the plaintext never persists.
//! - A mismatch is `Ok(false)`; only a malformed stored hash is an error.

use crate::error::{AppError, AppResult};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hashes a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| AppError::Internal(format!("failed to hash password: {err}")))?;
    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored PHC-format hash.
pub fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|err| AppError::Internal(format!("invalid stored password hash: {err}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password};
    use crate::error::AppError;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("Password-123").unwrap();
        assert!(verify_password("Password-123", &hash).unwrap());
        assert!(!verify_password("Password-124", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        let first = hash_password("Password-123").unwrap();
        let second = hash_password("Password-123").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_stored_hash_is_internal_error() {
        let err = verify_password("Password-123", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
