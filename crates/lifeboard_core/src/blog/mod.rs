//! Blog catalog and filtered-view computation.
//!
//! # Responsibility
//! - Seed the read-only post catalog at startup.
//! - Compute search/category/featured/related views over it.
//!
//! # Invariants
//! - The catalog never changes after seeding.
//! - Every view preserves catalog order; no ranking is applied.

pub mod catalog;
pub mod filter;
