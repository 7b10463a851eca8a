//! Core domain logic for the NoteVault backend.
//! This crate is the single source of truth for authorization, token trust
//! and the failure-to-status mapping; transport layers stay thin.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use auth::token::{Claims, TokenCodec};
pub use config::TokenConfig;
pub use error::{AppError, AppResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::identity::Identity;
pub use model::note::{Note, NoteId};
pub use model::user::{Role, User, UserId};
pub use repo::note_repo::{NoteRepository, SqliteNoteRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use service::account_service::AccountService;
pub use service::note_service::NoteService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
