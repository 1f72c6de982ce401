//! Application state for Axum handlers.

use minijinja::Environment;
use std::sync::Arc;

use crate::views;

/// Application state shared across all HTTP handlers.
///
/// Cloned (cheaply via Arc) for each request. The per-user board does NOT
/// live here — it belongs to the session, so handlers receive it through the
/// `Session` extractor instead of shared state.
#[derive(Clone)]
pub struct AppState {
    /// Compiled page templates
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    /// Create the application state, compiling the bundled templates.
    ///
    /// # Errors
    ///
    /// [`minijinja::Error`] when a bundled template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        Ok(Self {
            templates: Arc::new(views::environment()?),
        })
    }
}
