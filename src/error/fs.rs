//! File system errors

use std::path::Path;

use super::ConvertError;

/// Creates a file read error
pub fn read_failed(path: &Path, reason: impl ToString) -> ConvertError {
    ConvertError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write error
pub fn write_failed(path: &Path, reason: impl ToString) -> ConvertError {
    ConvertError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a directory read error
pub fn dir_read_failed(path: &Path, reason: impl ToString) -> ConvertError {
    ConvertError::DirectoryReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> ConvertError {
    ConvertError::IoError {
        message: message.into(),
    }
}
