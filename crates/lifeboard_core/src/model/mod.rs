//! Domain model for the todo collection and blog catalog.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep the persisted snapshot wire shape in one place.
//!
//! # Invariants
//! - Every todo is identified by a stable integer `TodoId`.
//! - Blog posts are read-only after seeding.

pub mod post;
pub mod todo;
