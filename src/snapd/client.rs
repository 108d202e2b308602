//! snapd client operations
//!
//! Change requests (install, refresh, remove) are acknowledged differently by
//! the daemon, and each action carries its own [`AckPolicy`]:
//!
//! | action  | policy            | synchronous failure                 |
//! |---------|-------------------|-------------------------------------|
//! | install | `RejectOnError`   | `DaemonRequestError`                |
//! | refresh | `RequireAccepted` | `UpgradeRejected` unless `Accepted` |
//! | remove  | `FireAndForget`   | none (reply is only logged)         |
//!
//! Transport failures surface as `DaemonUnreachable` for every action.

use serde_json::json;
use tracing::{debug, info, warn};

use super::response::{DaemonRecord, Envelope, Origin, STATUS_ACCEPTED, STATUS_OK};
use super::transport::{DaemonRequest, Transport};
use crate::domain::{AppId, StoreQuery};
use crate::error::{Result, daemon_request_error, upgrade_rejected};

/// Change actions understood by `POST /v2/snaps/{name}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapAction {
    Install,
    Refresh,
    Remove,
}

/// How a change request's reply is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckPolicy {
    /// The reply is logged and otherwise ignored
    FireAndForget,
    /// Fails when the daemon answers with an error response
    RejectOnError,
    /// Fails unless the daemon reports the change as accepted
    RequireAccepted,
}

impl SnapAction {
    pub fn as_str(self) -> &'static str {
        match self {
            SnapAction::Install => "install",
            SnapAction::Refresh => "refresh",
            SnapAction::Remove => "remove",
        }
    }

    pub fn ack_policy(self) -> AckPolicy {
        match self {
            SnapAction::Install => AckPolicy::RejectOnError,
            SnapAction::Refresh => AckPolicy::RequireAccepted,
            SnapAction::Remove => AckPolicy::FireAndForget,
        }
    }
}

/// Client for the package daemon's REST API
#[derive(Debug, Clone)]
pub struct SnapdClient<T> {
    transport: T,
}

impl<T: Transport> SnapdClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Request installation; completes once snapd has queued the change
    pub async fn install(&self, id: &AppId) -> Result<()> {
        self.change(id, SnapAction::Install).await
    }

    /// Request a refresh; fails unless snapd accepts it
    pub async fn upgrade(&self, id: &AppId) -> Result<()> {
        self.change(id, SnapAction::Refresh).await
    }

    /// Request removal without checking the reply
    pub async fn remove(&self, id: &AppId) -> Result<()> {
        self.change(id, SnapAction::Remove).await
    }

    async fn change(&self, id: &AppId, action: SnapAction) -> Result<()> {
        info!(app = %id, action = action.as_str(), "requesting snap change");

        let reply = self
            .transport
            .send(DaemonRequest::post(
                format!("/v2/snaps/{id}"),
                json!({ "action": action.as_str() }),
            ))
            .await?;

        debug!(app = %id, action = action.as_str(), response = %reply.text(), "snap change response");

        match action.ack_policy() {
            AckPolicy::FireAndForget => Ok(()),
            AckPolicy::RejectOnError => match Envelope::decode(&reply) {
                Ok(envelope) if envelope.is_error() => Err(daemon_request_error(
                    envelope.status_code,
                    envelope.message(),
                )),
                Ok(_) => Ok(()),
                // Only the HTTP status is left to judge an unreadable reply by
                Err(_) if reply.status >= 400 => {
                    Err(daemon_request_error(reply.status, reply.text()))
                }
                Err(_) => {
                    debug!(app = %id, status = reply.status, "change reply is not an envelope");
                    Ok(())
                }
            },
            AckPolicy::RequireAccepted => {
                let envelope = Envelope::decode(&reply)?;
                if envelope.status != STATUS_ACCEPTED {
                    return Err(upgrade_rejected(id.as_str(), envelope.message()));
                }
                Ok(())
            }
        }
    }

    /// All installed snaps, sorted by name
    pub async fn list_installed(&self) -> Result<Vec<DaemonRecord>> {
        debug!("listing installed snaps");
        let reply = self.transport.send(DaemonRequest::get("/v2/snaps")).await?;
        let envelope = Envelope::decode(&reply)?;
        if envelope.is_error() {
            return Err(daemon_request_error(
                envelope.status_code,
                envelope.message(),
            ));
        }
        envelope.records(Origin::Installed)
    }

    /// Store snaps matching the query, sorted by name
    ///
    /// A failed exact search is an empty result: the app is simply not in the
    /// store.
    pub async fn find_in_store(&self, query: &StoreQuery) -> Result<Vec<DaemonRecord>> {
        let name = query.as_param();
        debug!(query = name, "searching store");

        let reply = self
            .transport
            .send(DaemonRequest::get(format!("/v2/find?name={name}")))
            .await?;
        let envelope = Envelope::decode(&reply)?;

        match query {
            StoreQuery::Exact(id) => {
                if envelope.status != STATUS_OK {
                    debug!(app = %id, status = %envelope.status, "no store match");
                    return Ok(Vec::new());
                }
                let records = envelope.records(Origin::Store)?;
                Ok(records
                    .into_iter()
                    .filter(|record| record.name() == id.as_str())
                    .collect())
            }
            StoreQuery::All => {
                if envelope.is_error() {
                    return Err(daemon_request_error(
                        envelope.status_code,
                        envelope.message(),
                    ));
                }
                envelope.records(Origin::Store)
            }
        }
    }

    /// The best store match for one app, if any
    pub async fn find_one_in_store(&self, id: &AppId) -> Result<Option<DaemonRecord>> {
        let mut found = self
            .find_in_store(&StoreQuery::Exact(id.clone()))
            .await?;
        if found.len() > 1 {
            warn!(app = %id, matches = found.len(), "more than one store app found");
        }
        if found.is_empty() {
            return Ok(None);
        }
        Ok(Some(found.swap_remove(0)))
    }

    /// A single installed snap; `None` when snapd reports it as not found
    pub async fn find_installed(&self, id: &AppId) -> Result<Option<DaemonRecord>> {
        let reply = self
            .transport
            .send(DaemonRequest::get(format!("/v2/snaps/{id}")))
            .await?;
        debug!(app = %id, response = %reply.text(), "installed snap response");

        let envelope = Envelope::decode(&reply)?;
        if envelope.is_not_found() {
            return Ok(None);
        }
        if envelope.is_error() {
            return Err(daemon_request_error(
                envelope.status_code,
                envelope.message(),
            ));
        }
        envelope.record(Origin::Installed).map(Some)
    }
}
