//! Error types and handling for fmconv
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`frontmatter`]: Header extraction and parsing errors
//! - [`fs`]: File system errors
//! - [`batch`]: Directory conversion errors

pub mod batch;
pub mod frontmatter;
pub mod fs;

use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for fmconv operations
///
/// Paths are empty for in-memory conversions; [`ConvertError::with_path`]
/// attaches the file once the error reaches the file boundary.
#[derive(Error, Diagnostic, Debug)]
pub enum ConvertError {
    // Frontmatter errors
    #[error("No frontmatter found{}", location(.path))]
    #[diagnostic(
        code(fmconv::frontmatter::missing),
        help("The file must start with a '---' line and close the header with another '---' line")
    )]
    NoFrontmatter { path: String },

    #[error("Failed to parse frontmatter{}: {}", location(.path), .reason)]
    #[diagnostic(
        code(fmconv::frontmatter::parse_failed),
        help("The header block must be flat 'key: value' notation")
    )]
    HeaderParse { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(fmconv::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(fmconv::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to read directory: {path}: {reason}")]
    #[diagnostic(
        code(fmconv::fs::dir_read_failed),
        help("Check that the directory exists and is readable")
    )]
    DirectoryReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(fmconv::fs::io_error))]
    IoError { message: String },

    // Batch errors
    #[error("Invalid file pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(fmconv::batch::invalid_pattern),
        help("Use a glob such as '*.mdx' or '*.{{md,mdx}}'")
    )]
    InvalidPattern { pattern: String, reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(fmconv::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

fn location(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" in {path}")
    }
}

impl ConvertError {
    /// Attach a file path to a frontmatter error raised by an in-memory step.
    ///
    /// Other variants already carry their path and are returned unchanged.
    #[must_use]
    pub fn with_path(self, file: &Path) -> Self {
        let file = file.display().to_string();
        match self {
            ConvertError::NoFrontmatter { .. } => ConvertError::NoFrontmatter { path: file },
            ConvertError::HeaderParse { reason, .. } => {
                ConvertError::HeaderParse { path: file, reason }
            }
            other => other,
        }
    }

    /// Whether the input was left alone because it has no usable header.
    ///
    /// Parse failures count as missing headers for the caller.
    pub fn is_missing_header(&self) -> bool {
        matches!(
            self,
            ConvertError::NoFrontmatter { .. } | ConvertError::HeaderParse { .. }
        )
    }
}

impl From<serde_yaml::Error> for ConvertError {
    fn from(err: serde_yaml::Error) -> Self {
        ConvertError::HeaderParse {
            path: String::new(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ConvertError>;
