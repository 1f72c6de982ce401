//! The board: a session's ordered set of lists.
//!
//! The [`Board`] owns its [`List`]s and each list owns its todos; nothing is
//! shared or moved between lists. Lists and todos are addressed by stable
//! numeric ids rather than positions, so deleting an element never
//! invalidates a reference to any other element.
//!
//! Validation always runs before mutation: a failed operation leaves the
//! board untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::todo::{Todo, TodoId};
use crate::validate::{validate_list_name, validate_todo_name};

/// Stable identifier for a list, unique within its board.
///
/// Same max + 1 assignment scheme as [`TodoId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(pub u64);

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered collection of todos.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Stable identifier, unique within the board
    pub id: ListId,
    /// Name of the list (trimmed, 1-100 chars, unique on the board)
    pub name: String,
    /// Todos in insertion order
    pub todos: Vec<Todo>,
    /// When the list was created
    pub created_at: DateTime<Utc>,
}

impl List {
    fn new(id: ListId, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            todos: Vec::new(),
            created_at,
        }
    }

    /// Validates `name` and appends a new incomplete todo.
    ///
    /// The new todo's id is the highest existing id + 1, or 1 for an empty
    /// list.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidLength`] when the trimmed name is empty or over
    /// 100 characters. The list is untouched on error.
    pub fn add_todo(&mut self, name: &str, now: DateTime<Utc>) -> Result<TodoId, DomainError> {
        let name = validate_todo_name(name)?;
        let id = self.next_todo_id();
        self.todos.push(Todo::new(id, name, now));
        Ok(id)
    }

    /// Returns the todo with the given id, if any.
    #[must_use]
    pub fn todo(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Removes and returns the todo with the given id.
    ///
    /// Remaining todos keep their relative order and their ids.
    ///
    /// # Errors
    ///
    /// [`DomainError::NotFound`] when no todo has that id.
    pub fn remove_todo(&mut self, id: TodoId) -> Result<Todo, DomainError> {
        let position = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or_else(DomainError::todo_not_found)?;
        Ok(self.todos.remove(position))
    }

    /// Sets the completion flag on one todo.
    ///
    /// # Errors
    ///
    /// [`DomainError::NotFound`] when no todo has that id.
    pub fn set_complete(
        &mut self,
        id: TodoId,
        value: bool,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(DomainError::todo_not_found)?;
        todo.set_complete(value, now);
        Ok(())
    }

    /// Marks every todo complete and returns how many todos the list holds.
    ///
    /// A return of zero means the list was empty and nothing happened;
    /// callers should only report success for a non-zero return.
    pub fn complete_all(&mut self, now: DateTime<Utc>) -> usize {
        for todo in &mut self.todos {
            todo.set_complete(true, now);
        }
        self.todos.len()
    }

    /// True iff the list has at least one todo and all of them are complete.
    #[must_use]
    pub fn is_fully_complete(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|todo| todo.complete)
    }

    /// Number of todos not yet complete.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.complete).count()
    }

    fn next_todo_id(&self) -> TodoId {
        let max = self.todos.iter().map(|todo| todo.id.0).max().unwrap_or(0);
        TodoId(max + 1)
    }
}

/// A session's lists, insertion order preserved.
///
/// This is the single value persisted in the session; it is only ever
/// touched by the one request currently holding that session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    lists: Vec<List>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { lists: Vec::new() }
    }

    /// All lists in insertion order.
    #[must_use]
    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    /// Returns the list with the given id, if any.
    #[must_use]
    pub fn get(&self, id: ListId) -> Option<&List> {
        self.lists.iter().find(|list| list.id == id)
    }

    /// Returns the list with the given id mutably, if any.
    pub fn get_mut(&mut self, id: ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|list| list.id == id)
    }

    /// Validates `name` and appends a new list with no todos.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidLength`] for a bad length,
    /// [`DomainError::DuplicateName`] when the trimmed name exactly matches an
    /// existing list's name. The board is untouched on error.
    pub fn create(&mut self, name: &str, now: DateTime<Utc>) -> Result<ListId, DomainError> {
        let name = validate_list_name(name, self.lists.iter().map(|list| list.name.as_str()))?;
        let id = self.next_list_id();
        self.lists.push(List::new(id, name, now));
        Ok(id)
    }

    /// Validates `new_name` against every *other* list and renames in place.
    ///
    /// Renaming a list to its own unchanged name succeeds.
    ///
    /// # Errors
    ///
    /// [`DomainError::NotFound`] for a missing list,
    /// [`DomainError::InvalidLength`] or [`DomainError::DuplicateName`] from
    /// validation. The board is untouched on error.
    pub fn rename(&mut self, id: ListId, new_name: &str) -> Result<(), DomainError> {
        if self.get(id).is_none() {
            return Err(DomainError::list_not_found());
        }

        let others = self
            .lists
            .iter()
            .filter(|list| list.id != id)
            .map(|list| list.name.as_str());
        let new_name = validate_list_name(new_name, others)?;

        if let Some(list) = self.get_mut(id) {
            list.name = new_name;
        }
        Ok(())
    }

    /// Removes and returns the list with the given id, cascading to its
    /// todos. Remaining lists keep their relative order and their ids.
    ///
    /// # Errors
    ///
    /// [`DomainError::NotFound`] when no list has that id.
    pub fn remove(&mut self, id: ListId) -> Result<List, DomainError> {
        let position = self
            .lists
            .iter()
            .position(|list| list.id == id)
            .ok_or_else(DomainError::list_not_found)?;
        Ok(self.lists.remove(position))
    }

    fn next_list_id(&self) -> ListId {
        let max = self.lists.iter().map(|list| list.id.0).max().unwrap_or(0);
        ListId(max + 1)
    }
}
