//! Session persistence for the board.
//!
//! The whole per-user state is one value: the [`Board`], stored under the
//! single session key `"lists"`. Handlers load it into an owned value,
//! mutate through the core crate, and save it back — there is no ambient
//! global state.

use listkeeper_core::Board;
use tower_sessions::Session;

use crate::error::AppError;

/// The single session key holding the ordered list collection.
pub const LISTS_KEY: &str = "lists";

/// Loads the session's board, or an empty one for a fresh session.
///
/// # Errors
///
/// [`AppError`] when the session store fails or the stored value does not
/// deserialize.
pub async fn load_board(session: &Session) -> Result<Board, AppError> {
    Ok(session.get::<Board>(LISTS_KEY).await?.unwrap_or_default())
}

/// Writes the board back to the session.
///
/// # Errors
///
/// [`AppError`] when the session store rejects the write.
pub async fn save_board(session: &Session, board: &Board) -> Result<(), AppError> {
    session.insert(LISTS_KEY, board).await?;
    Ok(())
}
