//! Core domain logic for Lifeboard.
//! This crate is the single source of truth for business invariants.

pub mod blog;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use blog::catalog::sample_posts;
pub use blog::filter::{BlogCatalog, ALL_CATEGORY};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::post::BlogPost;
pub use model::todo::{TodoFilter, TodoId, TodoItem};
pub use repo::snapshot_repo::{
    RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository, SNAPSHOT_KEY,
};
pub use store::todo_store::{reduce, TodoAction, TodoStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
