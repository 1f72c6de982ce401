//! Todo items and their identifiers.
//!
//! A [`Todo`] belongs to exactly one [`crate::List`]; the list owns the
//! mutation operations (see [`crate::board`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier for a todo, unique within its list.
///
/// Assigned as max existing id + 1 (1 for the first todo), so deleting a todo
/// never shifts another todo's identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Stable identifier, unique within the owning list
    pub id: TodoId,
    /// Name of the todo (trimmed, 1-100 chars)
    pub name: String,
    /// Whether the todo is completed
    pub complete: bool,
    /// When the todo was created
    pub created_at: DateTime<Utc>,
    /// When the todo was last marked complete (if complete)
    pub completed_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Creates a new incomplete todo.
    #[must_use]
    pub const fn new(id: TodoId, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            complete: false,
            created_at,
            completed_at: None,
        }
    }

    /// Sets the completion flag, tracking when the todo was completed.
    pub fn set_complete(&mut self, value: bool, now: DateTime<Utc>) {
        self.complete = value;
        self.completed_at = value.then_some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_is_incomplete() {
        let now = Utc::now();
        let todo = Todo::new(TodoId(1), "Milk".to_string(), now);

        assert_eq!(todo.id, TodoId(1));
        assert_eq!(todo.name, "Milk");
        assert!(!todo.complete);
        assert_eq!(todo.created_at, now);
        assert_eq!(todo.completed_at, None);
    }

    #[test]
    fn set_complete_round_trip() {
        let created = Utc::now();
        let mut todo = Todo::new(TodoId(1), "Milk".to_string(), created);

        let done = Utc::now();
        todo.set_complete(true, done);
        assert!(todo.complete);
        assert_eq!(todo.completed_at, Some(done));

        todo.set_complete(false, Utc::now());
        assert!(!todo.complete);
        assert_eq!(todo.completed_at, None);
    }
}
