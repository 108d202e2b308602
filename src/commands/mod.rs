//! Command implementations for the appcenter CLI

pub mod completions;
pub mod install;
pub mod list;
pub mod remove;
pub mod show;
pub mod upgrade;
pub mod version;
