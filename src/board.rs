//! Todo Board State
//!
//! The whole board: ordered items, the pending input text and the id
//! source. Every user action maps to one method here. Counts are derived
//! from `items` on each call and never stored.

use reactive_stores::Store;

use crate::error::{BoardError, BoardResult};
use crate::models::{Item, ItemId};

/// Key that commits the draft text
pub const COMMIT_KEY: &str = "Enter";

/// Monotonic id source. Ids are never reused, even after removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Generator that continues after the highest id in `items`.
    /// Used when seeding a board with existing items.
    pub fn after(items: &[Item]) -> Self {
        let next = items.iter().map(|item| item.id.0).max().map_or(1, |max| max + 1);
        Self { next }
    }

    /// Peek at the id the next call to `generate` will hand out
    pub fn peek(&self) -> ItemId {
        ItemId(self.next)
    }

    pub fn generate(&mut self) -> ItemId {
        let id = ItemId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Total / completed / remaining counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

/// In-memory todo board
#[derive(Debug, Clone, Default, Store)]
pub struct TodoBoard {
    /// Display order is insertion order
    items: Vec<Item>,
    /// Unsubmitted input field content, kept verbatim
    draft_text: String,
    ids: IdGenerator,
}

impl TodoBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board pre-filled with `items`; new ids continue after the highest one.
    ///
    /// Seed constructor. The page always starts from `new()`; tests and
    /// callers that need a known starting list use this.
    pub fn with_items(items: Vec<Item>) -> Self {
        let ids = IdGenerator::after(&items);
        Self {
            items,
            draft_text: String::new(),
            ids,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    // ========================
    // Operations
    // ========================

    /// Append a new item built from `raw_text`.
    ///
    /// Blank text is rejected and the board is left untouched; no id is
    /// consumed in that case.
    pub fn add(&mut self, raw_text: &str) -> BoardResult<ItemId> {
        let item = Item::new(self.ids.peek(), raw_text)?;
        let id = self.ids.generate();
        log::debug!("[BOARD] add {} {:?}", id, item.text);
        self.items.push(item);
        Ok(id)
    }

    /// Add the draft text. The draft is cleared only when the add succeeds.
    pub fn add_draft(&mut self) -> BoardResult<ItemId> {
        let draft = std::mem::take(&mut self.draft_text);
        match self.add(&draft) {
            Ok(id) => Ok(id),
            Err(err) => {
                self.draft_text = draft;
                Err(err)
            }
        }
    }

    /// Flip the completion flag of `id`. Returns the new value.
    pub fn toggle(&mut self, id: ItemId) -> BoardResult<bool> {
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(BoardError::NotFound(id))?;
        *slot = slot.toggled();
        log::debug!("[BOARD] toggle {} -> completed={}", id, slot.completed);
        Ok(slot.completed)
    }

    /// Remove `id` from the board, returning the removed item.
    pub fn remove(&mut self, id: ItemId) -> BoardResult<Item> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(BoardError::NotFound(id))?;
        let removed = self.items.remove(index);
        log::debug!("[BOARD] remove {}", id);
        Ok(removed)
    }

    /// Drop every completed item. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        let removed = before - self.items.len();
        if removed > 0 {
            log::debug!("[BOARD] cleared {} completed", removed);
        }
        removed
    }

    /// Replace the draft text verbatim (no trimming).
    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    /// Submit the draft if `key` is the commit key.
    pub fn submit_on_key(&mut self, key: &str) -> Option<ItemId> {
        if key != COMMIT_KEY {
            return None;
        }
        match self.add_draft() {
            Ok(id) => Some(id),
            Err(err) => {
                log::trace!("[BOARD] submit ignored: {}", err);
                None
            }
        }
    }

    // ========================
    // Derived counts
    // ========================

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.total_count() - self.completed_count()
    }

    pub fn stats(&self) -> BoardStats {
        let total = self.total_count();
        let completed = self.completed_count();
        BoardStats {
            total,
            completed,
            remaining: total - completed,
        }
    }
}
