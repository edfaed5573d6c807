//! Blog catalog filtering.
//!
//! # Responsibility
//! - Compute filtered views over the read-only post catalog.
//! - Keep result ordering identical to catalog order.
//!
//! # Invariants
//! - Filtering never reorders or mutates posts.
//! - An empty search term and the `All` category are identity filters.

use crate::model::post::BlogPost;

/// Category sentinel disabling category filtering.
pub const ALL_CATEGORY: &str = "All";

/// Maximum related posts returned for one subject post.
const RELATED_POSTS_LIMIT: usize = 2;

/// Read-only post catalog with filtered-view computation.
pub struct BlogCatalog {
    posts: Vec<BlogPost>,
}

impl BlogCatalog {
    /// Creates a catalog over the provided posts, keeping their order.
    pub fn new(posts: Vec<BlogPost>) -> Self {
        Self { posts }
    }

    /// Creates a catalog seeded with the built-in sample content.
    pub fn with_sample_posts() -> Self {
        Self::new(super::catalog::sample_posts())
    }

    /// All posts in catalog order.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Looks up one post by id.
    pub fn post(&self, id: i64) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Posts matching `category` (or all when [`ALL_CATEGORY`]) whose title
    /// or excerpt contains `search_term` case-insensitively.
    ///
    /// An empty `search_term` matches everything. Catalog order is
    /// preserved; no ranking is applied.
    pub fn filtered_posts(&self, search_term: &str, category: &str) -> Vec<&BlogPost> {
        let needle = search_term.to_lowercase();
        self.posts
            .iter()
            .filter(|post| category == ALL_CATEGORY || post.category == category)
            .filter(|post| {
                needle.is_empty()
                    || contains_lowercase(&post.title, &needle)
                    || contains_lowercase(&post.excerpt, &needle)
            })
            .collect()
    }

    /// Posts flagged as featured, independent of any filter state.
    pub fn featured_posts(&self) -> Vec<&BlogPost> {
        self.posts.iter().filter(|post| post.featured).collect()
    }

    /// Up to two other posts sharing the subject's category, catalog order.
    ///
    /// Returns empty when `id` is unknown.
    pub fn related_posts(&self, id: i64) -> Vec<&BlogPost> {
        let Some(subject) = self.post(id) else {
            return Vec::new();
        };

        self.posts
            .iter()
            .filter(|post| post.id != id && post.category == subject.category)
            .take(RELATED_POSTS_LIMIT)
            .collect()
    }

    /// [`ALL_CATEGORY`] followed by the distinct categories in catalog order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORY.to_string()];
        for post in &self.posts {
            if !categories.iter().any(|existing| existing == &post.category) {
                categories.push(post.category.clone());
            }
        }
        categories
    }
}

// `needle` must already be lowercased by the caller.
fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
