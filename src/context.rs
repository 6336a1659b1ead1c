//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::TodoBoard;
use crate::config::BoardConfig;
use crate::store::BoardStore;

/// Board-wide state provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// The one board owned by this page
    pub store: BoardStore,
    /// Display strings
    pub config: BoardConfig,
}

impl BoardContext {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            store: Store::new(TodoBoard::new()),
            config,
        }
    }

    /// Create a context and provide it to all children
    pub fn provide(config: BoardConfig) -> Self {
        let ctx = Self::new(config);
        provide_context(ctx);
        ctx
    }
}

/// Get the board context from a parent component
pub fn use_board_context() -> BoardContext {
    expect_context::<BoardContext>()
}
