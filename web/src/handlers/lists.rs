//! List management endpoints.
//!
//! - GET  /lists — the list-of-lists page
//! - GET  /lists/new — new-list form
//! - POST /lists — create a list
//! - GET  /lists/:list_id — list detail
//! - GET  /lists/:list_id/edit — rename form
//! - POST /lists/:list_id — rename a list
//! - POST /lists/:list_id/delete — delete a list
//!
//! Domain failures become a flash plus a redirect; a bad or unknown
//! `:list_id` (non-numeric input included) always lands back on /lists with
//! an error flash, never a 5xx.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use listkeeper_core::{DomainError, ListId};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::extractors::Ajax;
use crate::flash::{self, Flash};
use crate::session::{load_board, save_board};
use crate::state::AppState;
use crate::views;

/// Form body for creating or renaming a list.
#[derive(Debug, Deserialize)]
pub struct ListNameForm {
    /// Requested list name
    pub list_name: String,
}

/// Parses a path segment into a list id. Non-numeric input is simply an
/// unknown list.
pub(crate) fn parse_list_id(raw: &str) -> Option<ListId> {
    raw.parse().ok().map(ListId)
}

/// The shared NotFound path for bad list references.
pub(crate) async fn list_not_found(session: &Session) -> Result<Response, AppError> {
    let message = DomainError::list_not_found().to_string();
    flash::set(session, Flash::error(message)).await?;
    Ok(Redirect::to("/lists").into_response())
}

/// GET / — send visitors to the list collection.
pub async fn home() -> Redirect {
    Redirect::to("/lists")
}

/// GET /lists — render the list of lists, fully complete ones last.
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let board = load_board(&session).await?;
    let flash = flash::take(&session).await?;
    Ok(views::lists_page(&state.templates, board.lists(), flash)?.into_response())
}

/// GET /lists/new — render the new-list form, pre-filled with any rejected
/// input from the previous attempt.
pub async fn new_form(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let flash = flash::take(&session).await?;
    let draft = flash::take_draft(&session).await?.unwrap_or_default();
    Ok(views::new_list_page(&state.templates, flash, draft)?.into_response())
}

/// POST /lists — create a new list.
pub async fn create(
    session: Session,
    Form(form): Form<ListNameForm>,
) -> Result<Response, AppError> {
    let mut board = load_board(&session).await?;

    match board.create(&form.list_name, Utc::now()) {
        Ok(id) => {
            save_board(&session, &board).await?;
            flash::set(&session, Flash::success("A new list has been added.")).await?;
            tracing::info!(list_id = %id, "list created");
            Ok(Redirect::to("/lists").into_response())
        }
        Err(err) => {
            flash::set(&session, Flash::error(err.to_string())).await?;
            flash::set_draft(&session, form.list_name).await?;
            Ok(Redirect::to("/lists/new").into_response())
        }
    }
}

/// GET /lists/:list_id — render one list's detail page.
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(list_id): Path<String>,
) -> Result<Response, AppError> {
    let board = load_board(&session).await?;
    let Some(list) = parse_list_id(&list_id).and_then(|id| board.get(id)) else {
        return list_not_found(&session).await;
    };

    let flash = flash::take(&session).await?;
    let draft = flash::take_draft(&session).await?.unwrap_or_default();
    Ok(views::list_page(&state.templates, list, flash, draft)?.into_response())
}

/// GET /lists/:list_id/edit — render the rename form.
///
/// The input is pre-filled with the rejected name from a failed rename, or
/// with the current name otherwise.
pub async fn edit_form(
    State(state): State<AppState>,
    session: Session,
    Path(list_id): Path<String>,
) -> Result<Response, AppError> {
    let board = load_board(&session).await?;
    let Some(list) = parse_list_id(&list_id).and_then(|id| board.get(id)) else {
        return list_not_found(&session).await;
    };

    let flash = flash::take(&session).await?;
    let draft = flash::take_draft(&session)
        .await?
        .unwrap_or_else(|| list.name.clone());
    Ok(views::edit_list_page(&state.templates, list, flash, draft)?.into_response())
}

/// POST /lists/:list_id — rename a list.
///
/// Uniqueness excludes the list itself, so saving the unchanged name
/// succeeds.
pub async fn update(
    session: Session,
    Path(list_id): Path<String>,
    Form(form): Form<ListNameForm>,
) -> Result<Response, AppError> {
    let mut board = load_board(&session).await?;
    let Some(id) = parse_list_id(&list_id).filter(|id| board.get(*id).is_some()) else {
        return list_not_found(&session).await;
    };

    match board.rename(id, &form.list_name) {
        Ok(()) => {
            save_board(&session, &board).await?;
            flash::set(&session, Flash::success("A list's name has been changed.")).await?;
            Ok(Redirect::to(&format!("/lists/{id}")).into_response())
        }
        Err(err) => {
            flash::set(&session, Flash::error(err.to_string())).await?;
            flash::set_draft(&session, form.list_name).await?;
            Ok(Redirect::to(&format!("/lists/{id}/edit")).into_response())
        }
    }
}

/// POST /lists/:list_id/delete — delete a list and its todos.
///
/// AJAX callers get the collection path back as a bare body instead of a
/// redirect.
pub async fn delete(
    session: Session,
    ajax: Ajax,
    Path(list_id): Path<String>,
) -> Result<Response, AppError> {
    let mut board = load_board(&session).await?;
    let removed = parse_list_id(&list_id).and_then(|id| board.remove(id).ok());

    match removed {
        Some(list) => {
            save_board(&session, &board).await?;
            tracing::info!(list_id = %list.id, "list deleted");
            if ajax.0 {
                Ok("/lists".into_response())
            } else {
                flash::set(&session, Flash::success("A list has been deleted.")).await?;
                Ok(Redirect::to("/lists").into_response())
            }
        }
        None if ajax.0 => Ok(StatusCode::NOT_FOUND.into_response()),
        None => list_not_found(&session).await,
    }
}
