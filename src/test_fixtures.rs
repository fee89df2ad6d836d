//! Test fixtures shared by unit tests.
//!
//! ```ignore
//! use crate::test_fixtures::{SAMPLE_POST, create_temp_dir, create_posts};
//!
//! let temp = create_temp_dir();
//! create_posts(&temp, &[("hello.mdx", SAMPLE_POST)]);
//! ```

use tempfile::TempDir;

/// A post in the old frontmatter schema, including a `layout` key that the
/// conversion drops.
pub const SAMPLE_POST: &str = "---
title: 'Pointer Problems'
date: '2023-03-22T00:00:00-0800'
tags: ['life', 'programming']
draft: true
summary: 'Perplexing predicaments with pointers: A plethora of practical problems for practicing programmers to ponder.'
layout: PostSimple
---

# Your MDX content here

This is the body of your MDX file.
";

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write `(file name, content)` pairs into `temp`.
///
/// # Panics
///
/// Panics if any file cannot be written.
pub fn create_posts(temp: &TempDir, posts: &[(&str, &str)]) {
    for (name, content) in posts {
        std::fs::write(temp.path().join(name), content).expect("Failed to write test post");
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_create_posts() {
        let temp = create_temp_dir();
        create_posts(&temp, &[("a.mdx", SAMPLE_POST), ("b.md", "body")]);
        assert!(temp.path().join("a.mdx").exists());
        assert_eq!(
            std::fs::read_to_string(temp.path().join("b.md")).unwrap(),
            "body"
        );
    }

    #[test]
    fn test_sample_post_starts_with_boundary() {
        assert!(SAMPLE_POST.starts_with("---\n"));
    }
}
