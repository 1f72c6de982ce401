//! One-shot flash messages and draft input.
//!
//! Domain operations return plain `Result`s; only the handlers translate an
//! outcome into a [`Flash`] stored under its own session key. The next page
//! render takes the flash out of the session, so it shows exactly once.
//!
//! A rejected form value is preserved the same way under a separate draft
//! key, so the re-rendered form can pre-fill what the user typed.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::AppError;

const FLASH_KEY: &str = "flash";
const DRAFT_KEY: &str = "draft";

/// Severity of a flash message; doubles as the CSS class on the rendered banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    /// The operation succeeded.
    Success,
    /// The operation was rejected; the message explains why.
    Error,
}

/// A transient status message shown on the next rendered page only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    /// Message severity
    pub kind: FlashKind,
    /// Human-readable message
    pub message: String,
}

impl Flash {
    /// A success flash.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    /// An error flash.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

/// Stores a flash for the next rendered page.
///
/// # Errors
///
/// [`AppError`] when the session store rejects the write.
pub async fn set(session: &Session, flash: Flash) -> Result<(), AppError> {
    session.insert(FLASH_KEY, flash).await?;
    Ok(())
}

/// Takes the pending flash, leaving none behind.
///
/// # Errors
///
/// [`AppError`] when the session store fails.
pub async fn take(session: &Session) -> Result<Option<Flash>, AppError> {
    Ok(session.remove::<Flash>(FLASH_KEY).await?)
}

/// Preserves a rejected form value for the next render.
///
/// # Errors
///
/// [`AppError`] when the session store rejects the write.
pub async fn set_draft(session: &Session, value: String) -> Result<(), AppError> {
    session.insert(DRAFT_KEY, value).await?;
    Ok(())
}

/// Takes the preserved form value, if any.
///
/// # Errors
///
/// [`AppError`] when the session store fails.
pub async fn take_draft(session: &Session) -> Result<Option<String>, AppError> {
    Ok(session.remove::<String>(DRAFT_KEY).await?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_as_css_class() {
        let success = serde_json::to_string(&FlashKind::Success).unwrap();
        let error = serde_json::to_string(&FlashKind::Error).unwrap();
        assert_eq!(success, "\"success\"");
        assert_eq!(error, "\"error\"");
    }

    #[test]
    fn constructors_set_kind() {
        assert_eq!(Flash::success("ok").kind, FlashKind::Success);
        assert_eq!(Flash::error("no").kind, FlashKind::Error);
    }
}
