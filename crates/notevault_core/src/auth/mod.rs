//! Authentication and authorization building blocks.
//!
//! # Responsibility
//! - Issue, verify and resolve signed identity tokens (`token`).
//! - Hash and verify passwords as an opaque one-way function (`password`).
//! - Decide access as pure predicates over identity and resource (`policy`).
//!
//! # Invariants
//! - Every protected operation derives its identity through
//!   `token::TokenCodec::resolve`; nothing else trusts raw credentials.

pub mod password;
pub mod policy;
pub mod token;
