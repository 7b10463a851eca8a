//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Absent rows surface as `Ok(None)` / row-count zero, never as errors;
//!   services decide which absence is a user-facing `NotFound`.
//! - Storage failures surface as `AppError::Internal` and propagate as-is.

pub mod note_repo;
pub mod user_repo;
