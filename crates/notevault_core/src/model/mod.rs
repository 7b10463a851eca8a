//! Domain model for accounts, notes and resolved identities.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep persistence and transport layers decoupled from each other.
//!
//! # Invariants
//! - `User` and `Note` are identified by storage-generated integer ids.
//! - `Identity` is derived from a verified credential and never persisted.

pub mod identity;
pub mod note;
pub mod user;
