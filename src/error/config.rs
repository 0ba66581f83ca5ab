//! Configuration errors

use super::DircatError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> DircatError {
    DircatError::ConfigNotFound { path: path.into() }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> DircatError {
    DircatError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DircatError {
    DircatError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> DircatError {
    DircatError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates an invalid include glob error
pub fn invalid_glob(pattern: impl Into<String>, reason: impl Into<String>) -> DircatError {
    DircatError::InvalidGlob {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
