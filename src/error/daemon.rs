//! Package daemon errors

use super::AppCenterError;

/// Creates a daemon unreachable error
pub fn unreachable(socket: impl Into<String>, reason: impl Into<String>) -> AppCenterError {
    AppCenterError::DaemonUnreachable {
        socket: socket.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a request the daemon rejected synchronously
pub fn rejected(status_code: u16, message: impl Into<String>) -> AppCenterError {
    AppCenterError::DaemonRequestError {
        status_code,
        message: message.into(),
    }
}

/// Creates an upgrade rejected error carrying the daemon's message
pub fn upgrade_rejected(app: impl Into<String>, message: impl Into<String>) -> AppCenterError {
    AppCenterError::UpgradeRejected {
        app: app.into(),
        message: message.into(),
    }
}

/// Creates a malformed response error
pub fn malformed(reason: impl Into<String>) -> AppCenterError {
    AppCenterError::MalformedDaemonResponse {
        reason: reason.into(),
    }
}
