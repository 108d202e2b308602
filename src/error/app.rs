//! Application lookup errors

use super::AppCenterError;

/// Creates an app not found error
pub fn not_found(app: impl Into<String>) -> AppCenterError {
    AppCenterError::AppNotFound { app: app.into() }
}

/// Creates an invalid app id error
pub fn invalid_id(id: impl Into<String>) -> AppCenterError {
    AppCenterError::InvalidAppId { id: id.into() }
}
