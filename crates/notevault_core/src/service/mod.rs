//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, identity resolution, policy and repository
//!   calls into use-case level APIs.
//! - Keep transport layers decoupled from storage details.
//!
//! # Invariants
//! - Every operation returns a success value or exactly one `AppError`.

pub mod account_service;
pub mod note_service;
