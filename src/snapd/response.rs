//! snapd response envelope and record decoding
//!
//! Replies are decoded here, at the transport boundary, so nothing untyped
//! leaves the client. Only `status`, `status-code` and `result` are read
//! (plus the optional `type`).

use serde::Deserialize;
use serde_json::Value;

use super::transport::DaemonReply;
use crate::error::{Result, malformed_response};

/// Status snapd reports for a change it has queued
pub const STATUS_ACCEPTED: &str = "Accepted";

/// Status snapd reports for a successful synchronous query
pub const STATUS_OK: &str = "OK";

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    status: String,
    #[serde(rename = "status-code", default)]
    status_code: Option<u16>,
    #[serde(default)]
    result: Value,
}

/// Decoded daemon response envelope
#[derive(Debug, Clone)]
pub struct Envelope {
    kind: Option<String>,
    pub status: String,
    /// `status-code` from the body, or the HTTP status when absent
    pub status_code: u16,
    result: Value,
}

impl Envelope {
    pub fn decode(reply: &DaemonReply) -> Result<Self> {
        let raw: RawEnvelope = serde_json::from_slice(&reply.body).map_err(|e| {
            malformed_response(format!("response is not a snapd envelope: {e}"))
        })?;

        Ok(Self {
            kind: raw.kind,
            status: raw.status,
            status_code: raw.status_code.unwrap_or(reply.status),
            result: raw.result,
        })
    }

    pub fn is_error(&self) -> bool {
        self.kind.as_deref() == Some("error") || self.status_code >= 400
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == 404
    }

    /// The daemon's own message, falling back to the status text
    pub fn message(&self) -> String {
        self.result
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                if self.status.is_empty() {
                    format!("status code {}", self.status_code)
                } else {
                    self.status.clone()
                }
            })
    }

    /// Decode a list result, sorted by name
    pub fn records(self, origin: Origin) -> Result<Vec<DaemonRecord>> {
        let mut snaps: Vec<SnapRecord> = serde_json::from_value(self.result)
            .map_err(|e| malformed_response(format!("{} snap list: {e}", origin.as_str())))?;
        snaps.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(snaps.into_iter().map(|snap| origin.wrap(snap)).collect())
    }

    /// Decode a single-object result
    pub fn record(self, origin: Origin) -> Result<DaemonRecord> {
        let snap: SnapRecord = serde_json::from_value(self.result)
            .map_err(|e| malformed_response(format!("{} snap: {e}", origin.as_str())))?;
        Ok(origin.wrap(snap))
    }
}

/// Fields read from a daemon snap record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SnapRecord {
    pub name: String,
    pub summary: String,
    pub channel: String,
    pub version: String,
}

/// Which daemon listing a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Installed,
    Store,
}

impl Origin {
    fn as_str(self) -> &'static str {
        match self {
            Origin::Installed => "installed",
            Origin::Store => "store",
        }
    }

    fn wrap(self, snap: SnapRecord) -> DaemonRecord {
        match self {
            Origin::Installed => DaemonRecord::Installed(snap),
            Origin::Store => DaemonRecord::Store(snap),
        }
    }
}

/// A snap record tagged with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaemonRecord {
    Installed(SnapRecord),
    Store(SnapRecord),
}

impl DaemonRecord {
    pub fn snap(&self) -> &SnapRecord {
        match self {
            DaemonRecord::Installed(snap) | DaemonRecord::Store(snap) => snap,
        }
    }

    pub fn name(&self) -> &str {
        &self.snap().name
    }
}
