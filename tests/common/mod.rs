//! Common test utilities for fmconv integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A post in the old frontmatter schema
#[allow(dead_code)]
pub const OLD_POST: &str = "---
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

/// `OLD_POST` after conversion
#[allow(dead_code)]
pub const NEW_POST: &str = "---
title: \"Pointer Problems\"
description: \"Perplexing predicaments with pointers: A plethora of practical problems for practicing programmers to ponder.\"
publishDate: \"22 Mar 2023\"
tags: [life, programming]
draft: true
---

# Your MDX content here

This is the body of your MDX file.
";

/// A temporary directory of posts for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// fmconv command running inside `workspace`
#[allow(deprecated)]
pub fn fmconv_cmd(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("fmconv").expect("fmconv binary should be built");
    cmd.current_dir(&workspace.path);
    cmd
}
