//! Board Store
//!
//! Uses Leptos reactive_stores so list, draft and counts re-render from one
//! owned `TodoBoard`. Every write goes through a `TodoBoard` method.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::TodoBoard;
use crate::models::ItemId;

/// Type alias for the store
pub type BoardStore = Store<TodoBoard>;

// ========================
// Store Helper Functions
// ========================

/// Replace the draft text
pub fn store_set_draft(store: &BoardStore, text: String) {
    store.update(|board| board.set_draft_text(text));
}

/// Submit the draft (add button)
pub fn store_add_draft(store: &BoardStore) {
    store.update(|board| {
        if let Err(err) = board.add_draft() {
            log::trace!("[STORE] add ignored: {}", err);
        }
        dump_items(board);
    });
}

/// Submit the draft if `key` commits it (keydown in the input)
pub fn store_submit_on_key(store: &BoardStore, key: &str) {
    store.update(|board| {
        if board.submit_on_key(key).is_some() {
            dump_items(board);
        }
    });
}

/// Toggle an item by ID
pub fn store_toggle_item(store: &BoardStore, id: ItemId) {
    store.update(|board| {
        if let Err(err) = board.toggle(id) {
            log::trace!("[STORE] toggle ignored: {}", err);
        }
    });
}

/// Remove an item by ID
pub fn store_remove_item(store: &BoardStore, id: ItemId) {
    store.update(|board| {
        if let Err(err) = board.remove(id) {
            log::trace!("[STORE] remove ignored: {}", err);
        }
        dump_items(board);
    });
}

/// Remove all completed items
pub fn store_clear_completed(store: &BoardStore) {
    store.update(|board| {
        board.clear_completed();
        dump_items(board);
    });
}

fn dump_items(board: &TodoBoard) {
    if log::log_enabled!(log::Level::Trace) {
        match serde_json::to_string(board.items()) {
            Ok(json) => log::trace!("[STORE] items: {}", json),
            Err(err) => log::warn!("[STORE] could not serialize items: {}", err),
        }
    }
}
