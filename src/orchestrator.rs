//! Package orchestration
//!
//! [`AppCenter`] is the entry point used by callers: it sequences daemon
//! calls, normalizes what comes back and reconciles installed and store views.
//! It holds no state of its own; the daemon owns every app's lifecycle.

use tracing::debug;

use crate::config::AppCenterConfig;
use crate::domain::{AppId, StoreQuery, VersionedApp};
use crate::error::{Result, app_not_found};
use crate::normalize::{DomainUrlBuilder, Normalizer, UrlBuilder};
use crate::reconcile::{join_apps, merge};
use crate::snapd::{SnapdClient, Transport, UnixSocketTransport};

/// Install, upgrade, remove and query apps through the package daemon
#[derive(Debug, Clone)]
pub struct AppCenter<T, U> {
    client: SnapdClient<T>,
    normalizer: Normalizer<U>,
}

impl AppCenter<UnixSocketTransport, DomainUrlBuilder> {
    /// Orchestrator talking to the configured snapd socket
    pub fn from_config(config: &AppCenterConfig) -> Self {
        Self::new(
            UnixSocketTransport::new(&config.socket, config.timeout()),
            DomainUrlBuilder::new(&config.domain),
        )
    }
}

impl<T: Transport, U: UrlBuilder> AppCenter<T, U> {
    pub fn new(transport: T, urls: U) -> Self {
        Self {
            client: SnapdClient::new(transport),
            normalizer: Normalizer::new(urls),
        }
    }

    pub fn client(&self) -> &SnapdClient<T> {
        &self.client
    }

    pub async fn install(&self, id: &AppId) -> Result<()> {
        self.client.install(id).await
    }

    pub async fn upgrade(&self, id: &AppId) -> Result<()> {
        self.client.upgrade(id).await
    }

    pub async fn remove(&self, id: &AppId) -> Result<()> {
        self.client.remove(id).await
    }

    /// One app with whatever the device and the store know about it
    pub async fn get_app(&self, id: &AppId) -> Result<VersionedApp> {
        let (installed, store) = tokio::try_join!(
            self.client.find_installed(id),
            self.client.find_one_in_store(id)
        )?;

        let installed = installed
            .map(|record| self.normalizer.normalize(record))
            .transpose()?;
        let store = store
            .map(|record| self.normalizer.normalize(record))
            .transpose()?;

        debug!(
            app = %id,
            installed = installed.is_some(),
            in_store = store.is_some(),
            "resolved app"
        );

        merge(installed, store).ok_or_else(|| app_not_found(id.as_str()))
    }

    /// Every installed and store app, one record per app
    pub async fn list_all_apps(&self) -> Result<Vec<VersionedApp>> {
        let (installed, store) = tokio::try_join!(
            self.client.list_installed(),
            self.client.find_in_store(&StoreQuery::All)
        )?;

        let installed = self.normalizer.normalize_all(installed)?;
        let store = self.normalizer.normalize_all(store)?;
        debug!(
            installed = installed.len(),
            store = store.len(),
            "reconciling apps"
        );

        Ok(join_apps(installed, store))
    }

    /// Apps on the device, sorted by name
    pub async fn list_installed_apps(&self) -> Result<Vec<VersionedApp>> {
        let installed = self.client.list_installed().await?;
        self.normalizer.normalize_all(installed)
    }

    /// Apps in the store, sorted by name
    pub async fn list_available_apps(&self) -> Result<Vec<VersionedApp>> {
        let store = self.client.find_in_store(&StoreQuery::All).await?;
        self.normalizer.normalize_all(store)
    }

    /// Installed apps with a different version in the store
    pub async fn list_upgradable_apps(&self) -> Result<Vec<VersionedApp>> {
        let all = self.list_all_apps().await?;
        Ok(all.into_iter().filter(VersionedApp::is_upgradable).collect())
    }
}
