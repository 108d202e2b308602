//! Configuration errors

use super::AppCenterError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> AppCenterError {
    AppCenterError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> AppCenterError {
    AppCenterError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> AppCenterError {
    AppCenterError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AppCenterError {
    AppCenterError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
