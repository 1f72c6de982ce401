//! Server-side page rendering.
//!
//! A single shared minijinja [`Environment`] holds the templates, compiled
//! into the binary with `include_str!`. Rendering is presentation only: the
//! view models below are flat snapshots of the domain types, ordered with
//! [`incomplete_first`] so unfinished work is shown before finished work.
//! Every row keeps its stable id, which is what the mutation routes address.

use axum::response::Html;
use listkeeper_core::{incomplete_first, List, Todo};
use minijinja::{context, Environment};
use serde::Serialize;

use crate::error::AppError;
use crate::flash::Flash;

/// Builds the template environment.
///
/// # Errors
///
/// [`minijinja::Error`] when a bundled template fails to parse; this is a
/// startup-time failure, not a per-request one.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("layout.html", include_str!("../templates/layout.html"))?;
    env.add_template("lists.html", include_str!("../templates/lists.html"))?;
    env.add_template("new_list.html", include_str!("../templates/new_list.html"))?;
    env.add_template("list.html", include_str!("../templates/list.html"))?;
    env.add_template("edit_list.html", include_str!("../templates/edit_list.html"))?;
    Ok(env)
}

/// Flat list snapshot for templates.
#[derive(Debug, Serialize)]
struct ListView {
    id: u64,
    name: String,
    remaining: usize,
    total: usize,
    complete: bool,
}

impl From<&List> for ListView {
    fn from(list: &List) -> Self {
        Self {
            id: list.id.0,
            name: list.name.clone(),
            remaining: list.remaining(),
            total: list.todos.len(),
            complete: list.is_fully_complete(),
        }
    }
}

/// Flat todo snapshot for templates.
#[derive(Debug, Serialize)]
struct TodoView {
    id: u64,
    name: String,
    complete: bool,
}

impl From<&Todo> for TodoView {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.0,
            name: todo.name.clone(),
            complete: todo.complete,
        }
    }
}

/// The list-of-lists page, fully complete lists last.
///
/// # Errors
///
/// [`AppError`] when the template fails to render.
pub fn lists_page(
    env: &Environment<'static>,
    lists: &[List],
    flash: Option<Flash>,
) -> Result<Html<String>, AppError> {
    let ordered: Vec<ListView> = incomplete_first(lists, List::is_fully_complete)
        .into_iter()
        .map(ListView::from)
        .collect();

    let html = env
        .get_template("lists.html")?
        .render(context! { lists => ordered, flash => flash })?;
    Ok(Html(html))
}

/// The new-list form.
///
/// # Errors
///
/// [`AppError`] when the template fails to render.
pub fn new_list_page(
    env: &Environment<'static>,
    flash: Option<Flash>,
    draft: String,
) -> Result<Html<String>, AppError> {
    let html = env
        .get_template("new_list.html")?
        .render(context! { flash => flash, draft => draft })?;
    Ok(Html(html))
}

/// The list detail page, complete todos last.
///
/// # Errors
///
/// [`AppError`] when the template fails to render.
pub fn list_page(
    env: &Environment<'static>,
    list: &List,
    flash: Option<Flash>,
    draft: String,
) -> Result<Html<String>, AppError> {
    let todos: Vec<TodoView> = incomplete_first(&list.todos, |todo| todo.complete)
        .into_iter()
        .map(TodoView::from)
        .collect();

    let html = env.get_template("list.html")?.render(context! {
        list => ListView::from(list),
        todos => todos,
        flash => flash,
        draft => draft,
    })?;
    Ok(Html(html))
}

/// The rename/delete form for one list.
///
/// # Errors
///
/// [`AppError`] when the template fails to render.
pub fn edit_list_page(
    env: &Environment<'static>,
    list: &List,
    flash: Option<Flash>,
    draft: String,
) -> Result<Html<String>, AppError> {
    let html = env.get_template("edit_list.html")?.render(context! {
        list => ListView::from(list),
        flash => flash,
        draft => draft,
    })?;
    Ok(Html(html))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;
    use chrono::Utc;
    use listkeeper_core::Board;

    fn board_with_list() -> (Board, listkeeper_core::ListId) {
        let mut board = Board::new();
        let id = board.create("Groceries", Utc::now()).unwrap();
        (board, id)
    }

    #[test]
    fn templates_parse() {
        environment().unwrap();
    }

    #[test]
    fn lists_page_shows_names_and_counts() {
        let env = environment().unwrap();
        let (mut board, id) = board_with_list();
        board
            .get_mut(id)
            .unwrap()
            .add_todo("Milk", Utc::now())
            .unwrap();

        let Html(html) = lists_page(&env, board.lists(), None).unwrap();
        assert!(html.contains("Groceries"));
        assert!(html.contains("1 / 1"));
        assert!(html.contains("/lists/1"));
    }

    #[test]
    fn fully_complete_list_gets_complete_class() {
        let env = environment().unwrap();
        let (mut board, id) = board_with_list();
        let list = board.get_mut(id).unwrap();
        let todo = list.add_todo("Milk", Utc::now()).unwrap();
        list.set_complete(todo, true, Utc::now()).unwrap();

        let Html(html) = list_page(&env, board.get(id).unwrap(), None, String::new()).unwrap();
        assert!(html.contains(r#"<h2 class="complete">Groceries</h2>"#));
    }

    #[test]
    fn flash_renders_once_per_page() {
        let env = environment().unwrap();
        let Html(html) =
            new_list_page(&env, Some(Flash::error("List name must be unique.")), String::new())
                .unwrap();
        assert!(html.contains(r#"class="flash error""#));
        assert!(html.contains("List name must be unique."));
    }

    #[test]
    fn draft_prefills_the_form() {
        let env = environment().unwrap();
        let Html(html) = new_list_page(&env, None, "Groceries".to_string()).unwrap();
        assert!(html.contains(r#"value="Groceries""#));
    }

    #[test]
    fn names_are_html_escaped() {
        let env = environment().unwrap();
        let mut board = Board::new();
        board.create("<script>alert(1)</script>", Utc::now()).unwrap();

        let Html(html) = lists_page(&env, board.lists(), None).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
