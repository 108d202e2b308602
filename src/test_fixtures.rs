//! Test fixtures for exercising the snapd client without a daemon.
//!
//! [`ScriptedTransport`] answers requests from a table of canned replies and
//! records everything it was sent.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{ScriptedTransport, snap_json};
//!
//! let transport = ScriptedTransport::new()
//!     .on(Method::GET, "/v2/snaps", 200, r#"{"status": "OK", "result": []}"#);
//! let client = SnapdClient::new(transport);
//! ```
//!
//! Requests with no scripted reply fail as `DaemonUnreachable`, the same way
//! a missing socket does.

use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;
use http::Method;

use crate::domain::AppId;
use crate::error::{Result, unreachable};
use crate::normalize::UrlBuilder;
use crate::snapd::{DaemonReply, DaemonRequest, Transport};

/// In-memory transport with canned replies keyed by method and path
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: HashMap<(Method, String), (u16, String)>,
    sent: Mutex<Vec<DaemonRequest>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the reply for one method and path
    #[must_use]
    pub fn on(mut self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.replies
            .insert((method, path.to_string()), (status, body.to_string()));
        self
    }

    /// Requests received so far, in order
    ///
    /// # Panics
    ///
    /// Panics if the request log lock is poisoned.
    pub fn requests(&self) -> Vec<DaemonRequest> {
        self.sent.lock().expect("request log poisoned").clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: DaemonRequest) -> Result<DaemonReply> {
        let key = (request.method.clone(), request.path.clone());
        self.sent
            .lock()
            .expect("request log poisoned")
            .push(request);

        match self.replies.get(&key) {
            Some((status, body)) => Ok(DaemonReply {
                status: *status,
                body: Bytes::from(body.clone()),
            }),
            None => Err(unreachable(
                "scripted",
                format!("no reply scripted for {} {}", key.0, key.1),
            )),
        }
    }
}

/// URL builder producing `https://{id}.example.com`
#[derive(Debug, Clone, Copy, Default)]
pub struct ExampleUrls;

impl UrlBuilder for ExampleUrls {
    fn app_url(&self, id: &AppId) -> String {
        format!("https://{id}.example.com")
    }
}

/// A snapd snap object on the stable channel
#[must_use]
pub fn snap_json(name: &str, version: &str) -> String {
    format!(
        r#"{{"name": "{name}", "summary": "{name} summary", "channel": "stable", "version": "{version}"}}"#
    )
}

/// A snapd sync response with a list result
#[must_use]
pub fn snap_list_json(snaps: &[(&str, &str)]) -> String {
    let items: Vec<String> = snaps
        .iter()
        .map(|(name, version)| snap_json(name, version))
        .collect();
    format!(
        r#"{{"type": "sync", "status": "OK", "status-code": 200, "result": [{}]}}"#,
        items.join(", ")
    )
}

/// The 404 envelope snapd returns for an unknown snap
pub const NOT_FOUND_JSON: &str = r#"{"type": "error", "status": "Not Found", "status-code": 404, "result": {"message": "snap not found", "kind": "snap-not-found"}}"#;

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_reply() {
        let transport = ScriptedTransport::new().on(Method::GET, "/v2/snaps", 200, "{}");
        let reply = transport
            .send(DaemonRequest::get("/v2/snaps"))
            .await
            .expect("scripted reply");
        assert_eq!(reply.status, 200);
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_unscripted_request_is_unreachable() {
        let transport = ScriptedTransport::new();
        assert!(transport.send(DaemonRequest::get("/v2/snaps")).await.is_err());
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_snap_list_json_is_valid() {
        let json: serde_json::Value =
            serde_json::from_str(&snap_list_json(&[("files", "1.0"), ("mail", "2.0")]))
                .expect("valid JSON");
        assert_eq!(json["result"][1]["name"], "mail");
    }
}
