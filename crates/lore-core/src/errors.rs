//! Cross-cutting error types for lore.
//!
//! Fetcher and tutor errors live in their own crates and never leave them:
//! they collapse into placeholder text at the crate boundary. What remains
//! here are input validation failures.

use thiserror::Error;

/// Errors raised while constructing core domain values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A topic was empty or whitespace only.
    #[error("topic must not be empty")]
    EmptyTopic,

    /// A string did not name a known enum variant.
    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}
