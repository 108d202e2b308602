//! Error types and handling for appcenter
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`daemon`]: snapd transport and protocol errors
//! - [`app`]: application lookup and identity errors
//! - [`config`]: Configuration errors

pub mod app;
pub mod config;
pub mod daemon;

pub use app::{invalid_id as invalid_app_id, not_found as app_not_found};
pub use config::{
    invalid as config_invalid, not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use daemon::{
    malformed as malformed_response, rejected as daemon_request_error, unreachable,
    upgrade_rejected,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for appcenter operations
#[derive(Error, Diagnostic, Debug)]
pub enum AppCenterError {
    // Daemon errors
    #[error("Package daemon unreachable at {socket}: {reason}")]
    #[diagnostic(
        code(appcenter::daemon::unreachable),
        help("Check that snapd is running and the socket path is correct")
    )]
    DaemonUnreachable { socket: String, reason: String },

    #[error("Package daemon rejected the request ({status_code}): {message}")]
    #[diagnostic(code(appcenter::daemon::request_error))]
    DaemonRequestError { status_code: u16, message: String },

    #[error("Upgrade of '{app}' rejected: {message}")]
    #[diagnostic(code(appcenter::daemon::upgrade_rejected))]
    UpgradeRejected { app: String, message: String },

    #[error("Malformed package daemon response: {reason}")]
    #[diagnostic(
        code(appcenter::daemon::malformed_response),
        help("The snapd API version may not be supported")
    )]
    MalformedDaemonResponse { reason: String },

    // App errors
    #[error("App '{app}' not found")]
    #[diagnostic(
        code(appcenter::app::not_found),
        help("Run 'appcenter list --available' to see apps in the store")
    )]
    AppNotFound { app: String },

    #[error("Invalid app id: '{id}'")]
    #[diagnostic(
        code(appcenter::app::invalid_id),
        help("App ids use lowercase letters, digits and '-'")
    )]
    InvalidAppId { id: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(appcenter::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(appcenter::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(appcenter::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(appcenter::config::invalid))]
    ConfigInvalid { message: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(appcenter::io_error))]
    IoError { message: String },
}

impl AppCenterError {
    /// True for outcomes a route layer reports as "not found"
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AppNotFound { .. } | Self::InvalidAppId { .. })
    }

    /// True for faults on the daemon side of the socket
    pub fn is_daemon_fault(&self) -> bool {
        matches!(
            self,
            Self::DaemonUnreachable { .. }
                | Self::DaemonRequestError { .. }
                | Self::MalformedDaemonResponse { .. }
        )
    }
}

impl From<std::io::Error> for AppCenterError {
    fn from(err: std::io::Error) -> Self {
        AppCenterError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for AppCenterError {
    fn from(err: inquire::InquireError) -> Self {
        AppCenterError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AppCenterError>;
