//! Todo store: pure reducer plus persistence side effect.
//!
//! # Responsibility
//! - Apply todo actions through a pure, storage-free reducer.
//! - Persist the full collection after every accepted action.
//!
//! # Invariants
//! - Collection order is most-recent-first.
//! - Item ids stay unique within the collection.
//! - Unknown-id actions and blank adds are no-ops, never errors.

use crate::model::todo::{TodoFilter, TodoId, TodoItem};
use crate::repo::snapshot_repo::{RepoResult, SnapshotRepository};
use log::{debug, info};
use std::time::{SystemTime, UNIX_EPOCH};

/// State transition over the todo collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Prepend a fully-built item. Built by [`TodoStore::add`] so the
    /// reducer stays free of clocks and id generation.
    Add(TodoItem),
    /// Flip completion for the matching id.
    Toggle(TodoId),
    /// Drop the matching id.
    Remove(TodoId),
    /// Drop every completed item.
    ClearCompleted,
}

/// Applies `action` to `todos`, returning whether state changed.
///
/// Pure and total: unknown ids and clears with nothing to clear are no-ops.
///
/// # Contract
/// - `Add` items must carry an id unique within `todos`; [`TodoStore`]
///   guarantees this for dispatched actions.
pub fn reduce(todos: &mut Vec<TodoItem>, action: &TodoAction) -> bool {
    match action {
        TodoAction::Add(item) => {
            todos.insert(0, item.clone());
            true
        }
        TodoAction::Toggle(id) => match todos.iter_mut().find(|item| item.id == *id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        },
        TodoAction::Remove(id) => {
            let before = todos.len();
            todos.retain(|item| item.id != *id);
            todos.len() != before
        }
        TodoAction::ClearCompleted => {
            let before = todos.len();
            todos.retain(|item| !item.completed);
            todos.len() != before
        }
    }
}

/// Owned todo store binding the reducer to snapshot persistence.
///
/// Constructed once at application start; the host render/dispatch layer
/// receives it by reference instead of holding component-scoped state.
pub struct TodoStore<R: SnapshotRepository> {
    todos: Vec<TodoItem>,
    repo: R,
}

impl<R: SnapshotRepository> TodoStore<R> {
    /// Opens the store, loading the persisted snapshot once.
    ///
    /// Missing or malformed snapshots start the store empty.
    pub fn open(repo: R) -> RepoResult<Self> {
        let todos = repo.load_snapshot()?;
        info!(
            "event=store_open module=store status=ok items={}",
            todos.len()
        );
        Ok(Self { todos, repo })
    }

    /// Dispatches one action; accepted actions persist the full collection.
    ///
    /// Returns whether the action changed state.
    pub fn dispatch(&mut self, action: TodoAction) -> RepoResult<bool> {
        let changed = reduce(&mut self.todos, &action);
        if changed {
            self.repo.save_snapshot(&self.todos)?;
        }
        debug!(
            "event=store_dispatch module=store status={} items={}",
            if changed { "accepted" } else { "rejected" },
            self.todos.len()
        );
        Ok(changed)
    }

    /// Adds a todo from raw input, prepending it (most-recent-first).
    ///
    /// Blank input (empty after trimming) is accepted as a no-op and returns
    /// `Ok(None)`; otherwise returns the new item's id.
    pub fn add(&mut self, text: &str) -> RepoResult<Option<TodoId>> {
        let now_ms = now_epoch_ms();
        let id = next_id(&self.todos, now_ms);
        let Some(item) = TodoItem::new(id, text, now_ms) else {
            return Ok(None);
        };

        self.dispatch(TodoAction::Add(item))?;
        Ok(Some(id))
    }

    /// Flips completion for `id`; unknown ids are no-ops.
    pub fn toggle(&mut self, id: TodoId) -> RepoResult<bool> {
        self.dispatch(TodoAction::Toggle(id))
    }

    /// Removes the item matching `id`; unknown ids are no-ops.
    pub fn remove(&mut self, id: TodoId) -> RepoResult<bool> {
        self.dispatch(TodoAction::Remove(id))
    }

    /// Removes every completed item. Idempotent.
    pub fn clear_completed(&mut self) -> RepoResult<bool> {
        self.dispatch(TodoAction::ClearCompleted)
    }

    /// Returns the subset visible under `filter`, preserving stored order.
    pub fn view(&self, filter: TodoFilter) -> Vec<TodoItem> {
        self.todos
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }

    /// Number of not-yet-completed items.
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|item| !item.completed).count()
    }

    /// Number of completed items.
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|item| item.completed).count()
    }

    /// Total number of items in the collection.
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

/// Allocates a fresh id unique within `todos`.
///
/// Ids are creation epoch-ms; same-millisecond additions bump forward until
/// a free value is found.
fn next_id(todos: &[TodoItem], now_ms: i64) -> TodoId {
    let mut candidate = now_ms;
    while todos.iter().any(|item| item.id == candidate) {
        candidate += 1;
    }
    candidate
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}

#[cfg(test)]
mod tests {
    use super::next_id;
    use crate::model::todo::TodoItem;

    #[test]
    fn next_id_returns_clock_value_when_free() {
        assert_eq!(next_id(&[], 1_700_000_000_000), 1_700_000_000_000);
    }

    #[test]
    fn next_id_bumps_past_same_millisecond_collisions() {
        let todos = vec![
            TodoItem::new(1_700_000_000_000, "first", 1_700_000_000_000).unwrap(),
            TodoItem::new(1_700_000_000_001, "second", 1_700_000_000_000).unwrap(),
        ];

        assert_eq!(next_id(&todos, 1_700_000_000_000), 1_700_000_000_002);
    }
}
