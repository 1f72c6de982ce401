//! Domain error types.
//!
//! Every variant is recoverable: the web layer turns them into a flash
//! message plus a redirect, never a 5xx. The `Display` texts are the exact
//! user-facing messages, so callers can flash `err.to_string()` directly.

use thiserror::Error;

/// Errors produced by board, list, and todo operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A name was empty or too long after trimming.
    ///
    /// The payload names the field ("List name" or "Todo name").
    #[error("{0} must be between 1 and 100 characters.")]
    InvalidLength(&'static str),

    /// A list name collided (case-sensitive) with an existing list.
    #[error("List name must be unique.")]
    DuplicateName,

    /// A list or todo reference did not resolve.
    ///
    /// The payload names the entity ("list" or "todo").
    #[error("The requested {0} does not exist.")]
    NotFound(&'static str),
}

impl DomainError {
    /// A missing list reference.
    #[must_use]
    pub const fn list_not_found() -> Self {
        Self::NotFound("list")
    }

    /// A missing todo reference.
    #[must_use]
    pub const fn todo_not_found() -> Self {
        Self::NotFound("todo")
    }
}
