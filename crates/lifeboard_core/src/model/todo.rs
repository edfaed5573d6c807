//! Todo domain model.
//!
//! # Responsibility
//! - Define the persisted todo record and its snapshot wire shape.
//! - Provide completion-state view filtering.
//!
//! # Invariants
//! - `id` is unique within one collection.
//! - `text` is trimmed and non-empty at creation.
//! - Snapshot field names stay camelCase for compatibility with snapshots
//!   written by earlier versions of the app.

use serde::{Deserialize, Serialize};

/// Stable identifier for a todo item.
///
/// Ids are epoch milliseconds at creation, bumped past collisions so they
/// stay unique within one collection. Kept as a type alias to make semantic
/// intent explicit in signatures.
pub type TodoId = i64;

/// Completion-state filter for todo views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoFilter {
    /// Every item, no filtering.
    All,
    /// Items with `completed == false`.
    Active,
    /// Items with `completed == true`.
    Completed,
}

impl TodoFilter {
    /// Returns whether `item` is visible under this filter.
    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }
}

/// Persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique id within the collection (epoch ms at creation).
    pub id: TodoId,
    /// Trimmed, non-empty description.
    pub text: String,
    /// Completion flag flipped by toggle actions.
    pub completed: bool,
    /// Creation time as epoch milliseconds.
    pub created_at: i64,
}

impl TodoItem {
    /// Creates an item with trimmed text and `completed = false`.
    ///
    /// Returns `None` when `text` trims to empty, so blank submissions never
    /// produce an item.
    pub fn new(id: TodoId, text: &str, created_at: i64) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            id,
            text: trimmed.to_string(),
            completed: false,
            created_at,
        })
    }
}
