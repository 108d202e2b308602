//! Application domain types
//!
//! Contains the canonical app record and its version-aware wrapper.

use serde::Serialize;

use super::AppId;

/// Descriptive record of an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct App {
    id: AppId,
    /// Human-readable name (the daemon's summary line)
    name: String,
    url: String,
    icon: String,
}

impl App {
    pub fn new(id: AppId, name: impl Into<String>, url: impl Into<String>, channel: &str) -> Self {
        let icon = icon_path(channel, &id);
        Self {
            id,
            name: name.into(),
            url: url.into(),
            icon,
        }
    }

    pub fn id(&self) -> &AppId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Relative icon path, see [`icon_path`]
    pub fn icon(&self) -> &str {
        &self.icon
    }
}

/// Relative icon path resolved by the channel-aware image proxy
pub fn icon_path(channel: &str, id: &AppId) -> String {
    format!("/rest/app_image?channel={channel}&app={id}")
}

/// An app together with its installed and available versions
///
/// At least one of the two versions is always present: values can only be
/// built through [`VersionedApp::installed`] or [`VersionedApp::available`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionedApp {
    app: App,
    installed_version: Option<String>,
    #[serde(rename = "current_version")]
    available_version: Option<String>,
}

impl VersionedApp {
    /// An app present on the device
    pub fn installed(app: App, version: impl Into<String>) -> Self {
        Self {
            app,
            installed_version: Some(version.into()),
            available_version: None,
        }
    }

    /// An app listed in the store
    pub fn available(app: App, version: impl Into<String>) -> Self {
        Self {
            app,
            installed_version: None,
            available_version: Some(version.into()),
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn id(&self) -> &AppId {
        self.app.id()
    }

    pub fn installed_version(&self) -> Option<&str> {
        self.installed_version.as_deref()
    }

    pub fn available_version(&self) -> Option<&str> {
        self.available_version.as_deref()
    }

    pub fn is_installed(&self) -> bool {
        self.installed_version.is_some()
    }

    /// Installed, listed in the store, and the two versions differ
    pub fn is_upgradable(&self) -> bool {
        matches!(
            (&self.installed_version, &self.available_version),
            (Some(installed), Some(available)) if installed != available
        )
    }

    /// Attach the store's version; the descriptive fields stay untouched
    pub(crate) fn set_available_version(&mut self, version: impl Into<String>) {
        self.available_version = Some(version.into());
    }
}
