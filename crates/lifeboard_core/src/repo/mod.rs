//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the snapshot persistence contract used by the todo store.
//! - Isolate SQLite and serialization details from store orchestration.
//!
//! # Invariants
//! - Snapshot writes fully overwrite the prior snapshot row.
//! - Malformed persisted snapshots recover as empty instead of erroring.

pub mod snapshot_repo;
