//! Todo endpoints, scoped to one list.
//!
//! - POST /lists/:list_id/todos — add a todo
//! - POST /lists/:list_id/todos/:todo_id/delete — delete a todo
//! - POST /lists/:list_id/todos/:todo_id/update — toggle completion
//! - POST /lists/:list_id/todos/complete_all — mark everything complete
//!
//! All routes redirect back to the list detail page; an unknown list takes
//! the shared NotFound path back to /lists.

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use listkeeper_core::{DomainError, TodoId};
use serde::Deserialize;
use tower_sessions::Session;

use super::lists::{list_not_found, parse_list_id};
use crate::error::AppError;
use crate::extractors::Ajax;
use crate::flash::{self, Flash};
use crate::session::{load_board, save_board};

/// Form body for adding a todo.
#[derive(Debug, Deserialize)]
pub struct TodoForm {
    /// Requested todo name
    pub todo: String,
}

/// Form body for toggling a todo's completion flag.
#[derive(Debug, Deserialize)]
pub struct CompletedForm {
    /// `"true"` marks the todo complete; anything else clears the flag
    pub completed: String,
}

fn parse_todo_id(raw: &str) -> Option<TodoId> {
    raw.parse().ok().map(TodoId)
}

/// POST /lists/:list_id/todos — add a todo to the list.
///
/// Success and failure both land back on the detail page; a rejected name is
/// preserved so the form can pre-fill it.
pub async fn create(
    session: Session,
    Path(list_id): Path<String>,
    Form(form): Form<TodoForm>,
) -> Result<Response, AppError> {
    let mut board = load_board(&session).await?;

    let (target, outcome) = {
        let Some(list) = parse_list_id(&list_id).and_then(|id| board.get_mut(id)) else {
            return list_not_found(&session).await;
        };
        let target = format!("/lists/{}", list.id);
        (target, list.add_todo(&form.todo, Utc::now()))
    };

    match outcome {
        Ok(todo_id) => {
            save_board(&session, &board).await?;
            flash::set(&session, Flash::success("A new todo has been added.")).await?;
            tracing::debug!(%todo_id, "todo added");
        }
        Err(err) => {
            flash::set(&session, Flash::error(err.to_string())).await?;
            flash::set_draft(&session, form.todo).await?;
        }
    }
    Ok(Redirect::to(&target).into_response())
}

/// POST /lists/:list_id/todos/:todo_id/delete — delete a todo.
///
/// AJAX callers get 204 No Content instead of a redirect.
pub async fn delete(
    session: Session,
    ajax: Ajax,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let mut board = load_board(&session).await?;
    let Some(list) = parse_list_id(&list_id).and_then(|id| board.get_mut(id)) else {
        return list_not_found(&session).await;
    };

    let target = format!("/lists/{}", list.id);
    let removed = parse_todo_id(&todo_id).and_then(|id| list.remove_todo(id).ok());

    match removed {
        Some(_) => {
            save_board(&session, &board).await?;
            if ajax.0 {
                Ok(StatusCode::NO_CONTENT.into_response())
            } else {
                flash::set(&session, Flash::success("A todo has been deleted.")).await?;
                Ok(Redirect::to(&target).into_response())
            }
        }
        None if ajax.0 => Ok(StatusCode::NOT_FOUND.into_response()),
        None => {
            let message = DomainError::todo_not_found().to_string();
            flash::set(&session, Flash::error(message)).await?;
            Ok(Redirect::to(&target).into_response())
        }
    }
}

/// POST /lists/:list_id/todos/:todo_id/update — set a todo's completion flag
/// from the `completed` form field.
pub async fn update(
    session: Session,
    Path((list_id, todo_id)): Path<(String, String)>,
    Form(form): Form<CompletedForm>,
) -> Result<Response, AppError> {
    let mut board = load_board(&session).await?;
    let Some(list) = parse_list_id(&list_id).and_then(|id| board.get_mut(id)) else {
        return list_not_found(&session).await;
    };

    let target = format!("/lists/{}", list.id);
    let value = form.completed == "true";
    let outcome = parse_todo_id(&todo_id)
        .ok_or_else(DomainError::todo_not_found)
        .and_then(|id| list.set_complete(id, value, Utc::now()));

    match outcome {
        Ok(()) => {
            save_board(&session, &board).await?;
            flash::set(&session, Flash::success("A todo has been updated.")).await?;
        }
        Err(err) => {
            flash::set(&session, Flash::error(err.to_string())).await?;
        }
    }
    Ok(Redirect::to(&target).into_response())
}

/// POST /lists/:list_id/todos/complete_all — mark every todo complete.
///
/// An empty list is left alone and gets no success flash, so the user never
/// sees a misleading "all complete" message for a list with nothing in it.
pub async fn complete_all(
    session: Session,
    Path(list_id): Path<String>,
) -> Result<Response, AppError> {
    let mut board = load_board(&session).await?;
    let Some(list) = parse_list_id(&list_id).and_then(|id| board.get_mut(id)) else {
        return list_not_found(&session).await;
    };

    let target = format!("/lists/{}", list.id);
    let marked = list.complete_all(Utc::now());

    save_board(&session, &board).await?;
    if marked > 0 {
        flash::set(
            &session,
            Flash::success("All todos have been marked complete."),
        )
        .await?;
    }
    Ok(Redirect::to(&target).into_response())
}
