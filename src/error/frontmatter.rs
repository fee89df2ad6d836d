//! Frontmatter errors

use super::ConvertError;

/// Creates a missing-frontmatter error without a path
pub fn missing() -> ConvertError {
    ConvertError::NoFrontmatter {
        path: String::new(),
    }
}

/// Creates a header parse error without a path
pub fn parse_failed(reason: impl Into<String>) -> ConvertError {
    ConvertError::HeaderParse {
        path: String::new(),
        reason: reason.into(),
    }
}
