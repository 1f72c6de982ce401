//! Pure domain logic for the listkeeper todo application.
//!
//! This crate is the functional core: synchronous, I/O-free operations over
//! in-memory collections. The web crate (the imperative shell) owns sessions,
//! HTTP, and rendering, and calls into this crate for every mutation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Imperative Shell (listkeeper-web)  │  ← HTTP, sessions, templates
//! ├─────────────────────────────────────────┤
//! │      Functional Core (this crate)       │
//! │  - Board: the per-session list set      │  ← Testable at memory speed
//! │  - List/Todo mutations + validation     │  ← No I/O, no side effects
//! │  - Display ordering helpers             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! All entities carry stable numeric ids (assigned as max existing id + 1),
//! so a reference held across a deletion stays valid or cleanly resolves to
//! [`DomainError::NotFound`] — never to the wrong element.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use listkeeper_core::Board;
//!
//! let mut board = Board::new();
//! let list_id = board.create("Groceries", Utc::now())?;
//!
//! let list = board.get_mut(list_id).ok_or("gone")?;
//! let todo_id = list.add_todo("Milk", Utc::now())?;
//! list.set_complete(todo_id, true, Utc::now())?;
//!
//! assert!(board.get(list_id).ok_or("gone")?.is_fully_complete());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod board;
pub mod display;
pub mod error;
pub mod todo;
pub mod validate;

// Re-export key types for convenience
pub use board::{Board, List, ListId};
pub use display::incomplete_first;
pub use error::DomainError;
pub use todo::{Todo, TodoId};

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
