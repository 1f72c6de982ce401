//! Axum web shell for the listkeeper todo application.
//!
//! This crate is the imperative shell around `listkeeper-core`: it parses
//! requests, loads the session's board, calls a core operation, and maps the
//! outcome to a redirect (with a one-shot flash message) or a rendered page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        Imperative Shell (this crate)    │  ← HTTP, session cookies
//! │  - Route handlers + form parsing        │  ← Flash messages, templates
//! │  - Session load/save of the Board       │  ← Logging, request ids
//! ├─────────────────────────────────────────┤
//! │        Functional Core                  │
//! │  - Board/List/Todo mutations            │  ← Pure, synchronous
//! │  - Validation + display ordering        │  ← No I/O, no side effects
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP request** arrives at an Axum handler
//! 2. **Load** the board from the session (single `"lists"` key)
//! 3. **Call** the core operation (validate-then-mutate)
//! 4. **Save** the board back when something changed
//! 5. **Stash** a one-shot flash (and any rejected input draft)
//! 6. **Redirect** or render
//!
//! Domain failures never become 5xx responses; they come back to the user as
//! a flash on a sensible prior page.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod flash;
pub mod handlers;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

// Re-export key types for convenience
pub use config::Config;
pub use error::AppError;
pub use extractors::Ajax;
pub use flash::{Flash, FlashKind};
pub use routes::build_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
