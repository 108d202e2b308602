//! Version reconciliation
//!
//! Joins the installed and store views into one record per app. The installed
//! side is the base: its descriptive fields are kept, and a store entry for the
//! same app contributes only its available version.

use std::collections::BTreeMap;

use crate::domain::{AppId, VersionedApp};

/// Full outer join of installed and store apps keyed by identity
///
/// Output is ordered by app id. When the store lists the same app more than
/// once, the last entry's version is kept.
pub fn join_apps(installed: Vec<VersionedApp>, store: Vec<VersionedApp>) -> Vec<VersionedApp> {
    let mut all_apps: BTreeMap<AppId, VersionedApp> = installed
        .into_iter()
        .map(|app| (app.id().clone(), app))
        .collect();

    for store_app in store {
        match all_apps.get_mut(store_app.id()) {
            Some(existing) => merge_store_version(existing, &store_app),
            None => {
                all_apps.insert(store_app.id().clone(), store_app);
            }
        }
    }

    all_apps.into_values().collect()
}

/// Combine the two lookups for a single app
pub fn merge(installed: Option<VersionedApp>, store: Option<VersionedApp>) -> Option<VersionedApp> {
    match (installed, store) {
        (Some(mut existing), Some(store_app)) => {
            merge_store_version(&mut existing, &store_app);
            Some(existing)
        }
        (Some(existing), None) => Some(existing),
        (None, store_app) => store_app,
    }
}

/// The precedence rule: only the store's version crosses over
fn merge_store_version(existing: &mut VersionedApp, store_app: &VersionedApp) {
    if let Some(version) = store_app.available_version() {
        existing.set_available_version(version);
    }
}
