//! Configuration file handling for appcenter
//!
//! This module contains data structures for:
//! - `appcenter.yaml` - daemon socket, request timeout and device domain

pub mod settings;

// Re-export commonly used types
pub use settings::{AppCenterConfig, DEFAULT_CONFIG_PATH};
