//! App record normalization
//!
//! Turns decoded daemon records into canonical [`VersionedApp`]s. Installed
//! records yield an installed version, store records an available version.

use crate::domain::{App, AppId, VersionedApp};
use crate::error::{Result, malformed_response};
use crate::snapd::DaemonRecord;

/// Resolves the externally reachable URL of an app
pub trait UrlBuilder: Send + Sync {
    fn app_url(&self, id: &AppId) -> String;
}

/// Apps served as subdomains of the device domain: `https://{app}.{domain}`
#[derive(Debug, Clone)]
pub struct DomainUrlBuilder {
    domain: String,
}

impl DomainUrlBuilder {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}

impl UrlBuilder for DomainUrlBuilder {
    fn app_url(&self, id: &AppId) -> String {
        format!("https://{id}.{}", self.domain)
    }
}

/// Converts daemon records into canonical apps
#[derive(Debug, Clone)]
pub struct Normalizer<U> {
    urls: U,
}

impl<U: UrlBuilder> Normalizer<U> {
    pub fn new(urls: U) -> Self {
        Self { urls }
    }

    pub fn normalize(&self, record: DaemonRecord) -> Result<VersionedApp> {
        match record {
            DaemonRecord::Installed(snap) => {
                let app = self.to_app(&snap.name, snap.summary, &snap.channel)?;
                Ok(VersionedApp::installed(app, snap.version))
            }
            DaemonRecord::Store(snap) => {
                let app = self.to_app(&snap.name, snap.summary, &snap.channel)?;
                Ok(VersionedApp::available(app, snap.version))
            }
        }
    }

    pub fn normalize_all(&self, records: Vec<DaemonRecord>) -> Result<Vec<VersionedApp>> {
        records
            .into_iter()
            .map(|record| self.normalize(record))
            .collect()
    }

    fn to_app(&self, name: &str, summary: String, channel: &str) -> Result<App> {
        let id = AppId::parse(name)
            .map_err(|_| malformed_response(format!("snap name '{name}' is not a valid app id")))?;
        let url = self.urls.app_url(&id);
        Ok(App::new(id, summary, url, channel))
    }
}
