//! HTTP over the snapd Unix socket
//!
//! Every call opens its own connection, so a transport can be shared freely
//! between concurrent operations. Connect, send and body collection run under
//! a single timeout; any failure in that window means the daemon is
//! unreachable.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use bytes::Bytes;
use http::{Method, Request, header};
use http_body_util::{BodyExt, Full};
use hyper_util::rt::TokioIo;
use tokio::net::UnixStream;
use tracing::{debug, trace};

use crate::error::{AppCenterError, Result, unreachable};

/// Default snapd socket location
pub const DEFAULT_SOCKET: &str = "/var/run/snapd.socket";

/// A request for the package daemon
#[derive(Debug, Clone, PartialEq)]
pub struct DaemonRequest {
    pub method: Method,
    /// Path and query, e.g. `/v2/find?name=mail`
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl DaemonRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: Some(body),
        }
    }
}

/// Raw reply from the package daemon
#[derive(Debug, Clone)]
pub struct DaemonReply {
    pub status: u16,
    pub body: Bytes,
}

impl DaemonReply {
    /// Body as text, for logging
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// A way of delivering requests to the package daemon
pub trait Transport: Send + Sync {
    fn send(&self, request: DaemonRequest) -> impl Future<Output = Result<DaemonReply>> + Send;
}

/// Transport speaking HTTP/1.1 over the daemon's Unix socket
#[derive(Debug, Clone)]
pub struct UnixSocketTransport {
    socket: PathBuf,
    timeout: Duration,
}

impl UnixSocketTransport {
    pub fn new(socket: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            socket: socket.into(),
            timeout,
        }
    }

    fn unreachable(&self, reason: impl std::fmt::Display) -> AppCenterError {
        unreachable(self.socket.display().to_string(), reason.to_string())
    }

    async fn round_trip(&self, request: DaemonRequest) -> Result<DaemonReply> {
        let stream = UnixStream::connect(&self.socket)
            .await
            .map_err(|e| self.unreachable(e))?;

        let (mut sender, connection) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
            .await
            .map_err(|e| self.unreachable(e))?;

        tokio::spawn(async move {
            if let Err(err) = connection.await {
                debug!(error = %err, "snapd connection closed with error");
            }
        });

        let mut builder = Request::builder()
            .method(request.method.clone())
            .uri(request.path.as_str())
            .header(header::HOST, "localhost");

        let body = match &request.body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Bytes::from(json.to_string())
            }
            None => Bytes::new(),
        };

        let http_request = builder
            .body(Full::new(body))
            .map_err(|e| AppCenterError::IoError {
                message: format!("invalid daemon request {}: {e}", request.path),
            })?;

        trace!(method = %request.method, path = %request.path, "sending snapd request");

        let response = sender
            .send_request(http_request)
            .await
            .map_err(|e| self.unreachable(e))?;

        let status = response.status().as_u16();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| self.unreachable(e))?
            .to_bytes();

        Ok(DaemonReply { status, body })
    }
}

impl Transport for UnixSocketTransport {
    async fn send(&self, request: DaemonRequest) -> Result<DaemonReply> {
        match tokio::time::timeout(self.timeout, self.round_trip(request)).await {
            Ok(reply) => reply,
            Err(_) => Err(self.unreachable(format!(
                "no reply within {} ms",
                self.timeout.as_millis()
            ))),
        }
    }
}
