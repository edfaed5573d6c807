//! Seeded blog content.
//!
//! # Responsibility
//! - Provide the startup post catalog consumed by filtering APIs.
//!
//! The catalog mirrors the sample content shipped with the site; a networked
//! build would replace this seed with a CMS fetch.

use crate::model::post::BlogPost;

fn post(
    id: i64,
    title: &str,
    excerpt: &str,
    author: &str,
    date: &str,
    read_time: &str,
    category: &str,
    tags: &[&str],
    featured: bool,
) -> BlogPost {
    BlogPost {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        author: author.to_string(),
        date: date.to_string(),
        read_time: read_time.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        featured,
    }
}

/// Returns the built-in sample posts, newest first.
pub fn sample_posts() -> Vec<BlogPost> {
    vec![
        post(
            1,
            "Getting Started with React 19: New Features and Improvements",
            "Explore the latest features in React 19 including automatic batching, \
             concurrent features, and improved server-side rendering capabilities.",
            "Sarah Johnson",
            "2024-01-15",
            "8 min read",
            "React",
            &["React", "JavaScript", "Frontend"],
            true,
        ),
        post(
            2,
            "Building Scalable APIs with Node.js and Express",
            "Learn best practices for creating robust, scalable APIs using Node.js, \
             Express, and modern development patterns.",
            "Mike Chen",
            "2024-01-12",
            "12 min read",
            "Backend",
            &["Node.js", "Express", "API"],
            false,
        ),
        post(
            3,
            "Mastering CSS Grid and Flexbox for Modern Layouts",
            "A practical walkthrough of CSS Grid and Flexbox, and how to combine \
             them for responsive layouts without framework lock-in.",
            "Emily Davis",
            "2024-01-10",
            "6 min read",
            "CSS",
            &["CSS", "Layout", "Design"],
            true,
        ),
        post(
            4,
            "TypeScript Best Practices for Large Codebases",
            "Patterns that keep TypeScript projects maintainable as they grow: \
             strict compiler settings, module boundaries, and typed APIs.",
            "Sarah Johnson",
            "2024-01-08",
            "10 min read",
            "TypeScript",
            &["TypeScript", "JavaScript"],
            false,
        ),
        post(
            5,
            "Optimizing React Performance with Memoization",
            "When memo, useMemo, and useCallback actually help, how to measure \
             re-renders, and the traps of premature memoization.",
            "Mike Chen",
            "2024-01-05",
            "7 min read",
            "React",
            &["React", "Performance"],
            false,
        ),
        post(
            6,
            "A Gentle Introduction to Docker for Web Developers",
            "Containerize a web app step by step: images, volumes, compose files, \
             and a workflow that matches local development.",
            "Emily Davis",
            "2024-01-03",
            "9 min read",
            "DevOps",
            &["Docker", "DevOps"],
            false,
        ),
    ]
}
