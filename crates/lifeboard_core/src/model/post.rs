//! Blog post domain model.
//!
//! # Responsibility
//! - Define the read-only post record seeded at startup.
//!
//! # Invariants
//! - `id` is unique within the catalog.
//! - Posts are never mutated after seeding; filtering only computes views.

use serde::{Deserialize, Serialize};

/// Read-only blog post seeded at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Unique id within the catalog.
    pub id: i64,
    /// Post headline, searched case-insensitively.
    pub title: String,
    /// Short summary, searched case-insensitively.
    pub excerpt: String,
    /// Display name of the author.
    pub author: String,
    /// Publication date as an ISO date string, e.g. `2024-01-15`.
    pub date: String,
    /// Human-readable estimate, e.g. `8 min read`.
    pub read_time: String,
    /// Single category used by category filtering.
    pub category: String,
    /// Free-form topic tags.
    pub tags: Vec<String>,
    /// Whether the post appears in the featured strip.
    pub featured: bool,
}
