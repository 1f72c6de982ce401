//! Router configuration.
//!
//! Builds the complete Axum router with all endpoints plus the session,
//! request-id, and trace layers.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::handlers::{health, lists, todos};
use crate::state::AppState;

/// Build the complete Axum router.
///
/// Configures the full route surface:
/// - Health check
/// - List collection pages and mutations
/// - Per-list todo mutations
///
/// Sessions are cookie-backed with an in-memory store; all per-user state
/// lives there, so the router itself is stateless beyond [`AppState`]'s
/// templates.
pub fn build_router(state: AppState) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    Router::new()
        .route("/", get(lists::home))
        .route("/health", get(health::health_check))
        .route("/lists", get(lists::index).post(lists::create))
        .route("/lists/new", get(lists::new_form))
        .route("/lists/:list_id", get(lists::show).post(lists::update))
        .route("/lists/:list_id/edit", get(lists::edit_form))
        .route("/lists/:list_id/delete", post(lists::delete))
        .route("/lists/:list_id/todos", post(todos::create))
        .route("/lists/:list_id/todos/complete_all", post(todos::complete_all))
        .route("/lists/:list_id/todos/:todo_id/delete", post(todos::delete))
        .route("/lists/:list_id/todos/:todo_id/update", post(todos::update))
        .layer(session_layer)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
