//! Common test utilities for appcenter integration tests
//!
//! [`FakeSnapd`] serves canned JSON over a real Unix socket so the binary and
//! the library can be driven end to end without a package daemon. It runs on
//! its own tokio runtime, so both `#[tokio::test]` and plain `#[test]` CLI
//! tests can use it.

use std::collections::HashMap;
use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use http::{Request, Response, StatusCode, header};
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tempfile::TempDir;
use tokio::net::UnixListener;
use tokio::runtime::Runtime;

pub const NOT_FOUND_JSON: &str = r#"{"type": "error", "status-code": 404, "status": "Not Found", "result": {"message": "snap not installed", "kind": "snap-not-found"}}"#;

pub const ACCEPTED_JSON: &str =
    r#"{"type": "async", "status-code": 202, "status": "Accepted", "result": null, "change": "7"}"#;

/// One request as the fake daemon saw it
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: String,
}

#[derive(Debug, Clone)]
enum Reply {
    Canned(u16, String),
    Silent,
}

#[derive(Default)]
struct State {
    routes: Mutex<HashMap<(String, String), Reply>>,
    recorded: Mutex<Vec<Recorded>>,
}

impl State {
    async fn respond(&self, request: Request<Incoming>) -> Response<Full<Bytes>> {
        let method = request.method().to_string();
        let path = request
            .uri()
            .path_and_query()
            .map_or_else(|| request.uri().path().to_string(), |pq| pq.as_str().to_string());
        let body = request
            .into_body()
            .collect()
            .await
            .map(|collected| collected.to_bytes())
            .unwrap_or_default();

        self.recorded.lock().unwrap().push(Recorded {
            method: method.clone(),
            path: path.clone(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });

        let reply = self
            .routes
            .lock()
            .unwrap()
            .get(&(method, path))
            .cloned()
            .unwrap_or_else(|| Reply::Canned(404, NOT_FOUND_JSON.to_string()));

        match reply {
            Reply::Canned(status, body) => Response::builder()
                .status(StatusCode::from_u16(status).unwrap())
                .header(header::CONTENT_TYPE, "application/json")
                .body(Full::new(Bytes::from(body)))
                .unwrap(),
            Reply::Silent => std::future::pending().await,
        }
    }
}

/// A snapd stand-in listening on a socket inside a temp directory
#[allow(dead_code)]
pub struct FakeSnapd {
    pub temp: TempDir,
    pub socket: PathBuf,
    state: Arc<State>,
    runtime: Option<Runtime>,
}

#[allow(dead_code)]
impl FakeSnapd {
    /// Start serving; unrouted requests get a 404 error envelope
    pub fn start() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let socket = temp.path().join("snapd.socket");
        let state = Arc::new(State::default());

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("Failed to build fake snapd runtime");

        let listener = {
            let _guard = runtime.enter();
            UnixListener::bind(&socket).expect("Failed to bind fake snapd socket")
        };

        let accept_state = Arc::clone(&state);
        runtime.spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let state = Arc::clone(&accept_state);
                tokio::spawn(async move {
                    let service = service_fn(move |request| {
                        let state = Arc::clone(&state);
                        async move { Ok::<_, Infallible>(state.respond(request).await) }
                    });
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        Self {
            temp,
            socket,
            state,
            runtime: Some(runtime),
        }
    }

    /// Answer `method path` with a status and JSON body
    pub fn route(&self, method: &str, path: &str, status: u16, body: &str) -> &Self {
        self.state.routes.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            Reply::Canned(status, body.to_string()),
        );
        self
    }

    /// Accept `method path` but never answer
    pub fn hang(&self, method: &str, path: &str) -> &Self {
        self.state
            .routes
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), Reply::Silent);
        self
    }

    /// Requests received so far, in arrival order
    pub fn requests(&self) -> Vec<Recorded> {
        self.state.recorded.lock().unwrap().clone()
    }

    pub fn socket(&self) -> &Path {
        &self.socket
    }

    /// Write an appcenter.yaml pointing at this daemon
    pub fn write_config(&self, extra: &str) -> PathBuf {
        let path = self.temp.path().join("appcenter.yaml");
        let yaml = format!("socket: {}\n{}", self.socket.display(), extra);
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }
}

impl Drop for FakeSnapd {
    fn drop(&mut self) {
        // May run inside a test's own runtime, where a blocking shutdown panics
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

/// A snapd snap object
pub fn snap_json(name: &str, version: &str) -> String {
    format!(
        r#"{{"id": "{name}-id", "name": "{name}", "summary": "{name} summary", "channel": "stable", "version": "{version}", "type": "app"}}"#
    )
}

/// A sync envelope whose result is a list of snaps
#[allow(dead_code)]
pub fn snap_list_json(snaps: &[(&str, &str)]) -> String {
    let items: Vec<String> = snaps
        .iter()
        .map(|(name, version)| snap_json(name, version))
        .collect();
    format!(
        r#"{{"type": "sync", "status-code": 200, "status": "OK", "result": [{}]}}"#,
        items.join(", ")
    )
}

/// A sync envelope whose result is one snap
#[allow(dead_code)]
pub fn snap_detail_json(name: &str, version: &str) -> String {
    format!(
        r#"{{"type": "sync", "status-code": 200, "status": "OK", "result": {}}}"#,
        snap_json(name, version)
    )
}

/// The reference scenario: files 1.0 installed, files 1.1 and mail 2.0 in the store
#[allow(dead_code)]
pub fn files_and_mail() -> FakeSnapd {
    let snapd = FakeSnapd::start();
    snapd
        .route("GET", "/v2/snaps", 200, &snap_list_json(&[("files", "1.0")]))
        .route(
            "GET",
            "/v2/find?name=*",
            200,
            &snap_list_json(&[("files", "1.1"), ("mail", "2.0")]),
        )
        .route("GET", "/v2/snaps/files", 200, &snap_detail_json("files", "1.0"))
        .route(
            "GET",
            "/v2/find?name=files",
            200,
            &snap_list_json(&[("files", "1.1")]),
        )
        .route(
            "GET",
            "/v2/find?name=mail",
            200,
            &snap_list_json(&[("mail", "2.0")]),
        );
    snapd
}
