//! appcenter - application manager for a home-server appliance
//!
//! Queries installed and store apps from the local package daemon (snapd),
//! reconciles both views into one version-aware record per app, and requests
//! installs, upgrades and removals.
//!
//! ```ignore
//! use appcenter::config::AppCenterConfig;
//! use appcenter::domain::AppId;
//! use appcenter::orchestrator::AppCenter;
//!
//! let center = AppCenter::from_config(&AppCenterConfig::default());
//! let mail = center.get_app(&AppId::parse("mail")?).await?;
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod orchestrator;
pub mod reconcile;
pub mod snapd;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use domain::{App, AppId, StoreQuery, VersionedApp};
pub use error::{AppCenterError, Result};
pub use orchestrator::AppCenter;
