//! Terminal presentation
//!
//! This module handles:
//! - Rendering apps as text or JSON
//! - A spinner shown while waiting on the package daemon

pub mod display;
pub mod progress;

pub use display::{print_app_detail, print_app_list, print_json};
pub use progress::Spinner;
