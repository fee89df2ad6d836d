//! Directory conversion errors

use super::ConvertError;

/// Creates an invalid glob pattern error
pub fn invalid_pattern(pattern: &str, reason: impl ToString) -> ConvertError {
    ConvertError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}
