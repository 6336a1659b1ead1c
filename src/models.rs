//! Board Models
//!
//! The todo item and its identifier.

use std::fmt;

use serde::Serialize;

use crate::error::{BoardError, BoardResult};

/// Opaque item identifier, unique within one board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Trimmed, non-empty text; fixed at creation
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Item {
    /// Create an uncompleted item from raw input text.
    ///
    /// Surrounding whitespace is trimmed. Blank input is rejected.
    pub fn new(id: ItemId, raw_text: &str) -> BoardResult<Self> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(BoardError::BlankText);
        }
        Ok(Self {
            id,
            text: text.to_string(),
            completed: false,
        })
    }

    /// Copy of this item with `completed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation_trims_text() {
        let item = Item::new(ItemId(1), "  Buy milk \n").unwrap();
        assert_eq!(item.id, ItemId(1));
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
    }

    #[test]
    fn test_item_creation_rejects_blank() {
        assert_eq!(Item::new(ItemId(1), ""), Err(BoardError::BlankText));
        assert_eq!(Item::new(ItemId(1), " \t\n "), Err(BoardError::BlankText));
    }

    #[test]
    fn test_item_keeps_inner_whitespace() {
        let item = Item::new(ItemId(3), " walk   the dog ").unwrap();
        assert_eq!(item.text, "walk   the dog");
    }

    #[test]
    fn test_toggled_only_flips_completed() {
        let item = Item::new(ItemId(7), "Read").unwrap();
        let done = item.toggled();
        assert!(done.completed);
        assert_eq!(done.id, item.id);
        assert_eq!(done.text, item.text);
        assert_eq!(done.toggled(), item);
    }

    #[test]
    fn test_item_id_serializes_as_number() {
        let item = Item::new(ItemId(42), "Answer").unwrap();
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":42,"text":"Answer","completed":false}"#);
    }
}
