//! Account use-case service: registration and login.
//!
//! # Responsibility
//! - Validate credentials, enforce email uniqueness, hash passwords and
//!   issue identity tokens.
//!
//! # Invariants
//! - Check order on register: missing fields, email syntax, password
//!   strength, uniqueness. Each failure carries its canonical message.
//! - Check order on login: missing fields, account existence, hash match.
//! - Issued login tokens carry the persisted role, never a default.

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::TokenCodec;
use crate::error::{AppError, AppResult};
use crate::model::user::Role;
use crate::repo::user_repo::UserRepository;
use crate::validation::{is_email, is_strong_password};
use log::info;

/// Account service facade over a user repository and token codec.
pub struct AccountService<R: UserRepository> {
    repo: R,
    codec: TokenCodec,
}

impl<R: UserRepository> AccountService<R> {
    /// Creates a service using the provided repository and codec.
    pub fn new(repo: R, codec: TokenCodec) -> Self {
        Self { repo, codec }
    }

    /// Registers a new account and returns a token for it.
    ///
    /// # Contract
    /// - New accounts always start with `Role::User`.
    /// - The returned token authenticates the freshly created identity.
    pub fn register(&self, email: &str, password: &str) -> AppResult<String> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::FieldMissing(
                "Required field(s) have missing values".to_string(),
            ));
        }

        if !is_email(email) {
            return Err(AppError::FieldInvalid("Input must be an email".to_string()));
        }

        if !is_strong_password(password) {
            return Err(AppError::FieldInvalid(
                "Password not strong enough".to_string(),
            ));
        }

        if self.repo.find_by_email(email)?.is_some() {
            return Err(AppError::UniqueConflict("Email already taken".to_string()));
        }

        let password_hash = hash_password(password)?;
        let user_id = self.repo.insert_user(email, &password_hash, Role::User)?;
        info!("event=account_registered module=account status=ok user_id={user_id}");

        self.codec.issue(user_id, email, Role::User)
    }

    /// Authenticates an existing account and returns a token for it.
    pub fn login(&self, email: &str, password: &str) -> AppResult<String> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::FieldMissing(
                "Required field(s) have missing values".to_string(),
            ));
        }

        let user = self
            .repo
            .find_by_email(email)?
            .ok_or_else(|| AppError::NotFound("Email does not exist".to_string()))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::FieldInvalid("Wrong password".to_string()));
        }

        info!(
            "event=account_login module=account status=ok user_id={} role={}",
            user.user_id,
            user.role.as_str()
        );
        self.codec.issue(user.user_id, &user.email, user.role)
    }
}
