//! Board Errors
//!
//! Reasons a board operation was not performed. None of these reach the
//! user: the UI drops them and leaves state untouched.

use thiserror::Error;

use crate::models::ItemId;

/// Result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Item text was empty after trimming
    #[error("item text is blank")]
    BlankText,
    /// No item with this id is on the board
    #[error("no item with id {0}")]
    NotFound(ItemId),
}
