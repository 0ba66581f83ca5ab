//! File system errors

use std::path::Path;

use super::DircatError;

/// Creates an output create failed error
pub fn output_create_failed(path: &Path, reason: impl ToString) -> DircatError {
    DircatError::OutputCreateFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> DircatError {
    DircatError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> DircatError {
    DircatError::IoError {
        message: message.into(),
    }
}
