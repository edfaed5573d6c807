//! Todo state store.
//!
//! # Responsibility
//! - Own the in-memory todo collection for the process lifetime.
//! - Bind the pure reducer to the snapshot persistence side effect.
//!
//! # Invariants
//! - The store is the only writer of the todo collection and its snapshot.
//! - Rejected (no-op) actions never touch storage.

pub mod todo_store;
