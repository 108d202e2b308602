//! Package daemon (snapd) client
//!
//! Talks to snapd's REST API over its Unix socket and decodes every reply
//! into typed records before handing it on.

pub mod client;
pub mod response;
pub mod transport;

pub use client::{AckPolicy, SnapAction, SnapdClient};
pub use response::{DaemonRecord, Envelope, Origin, SnapRecord};
pub use transport::{DEFAULT_SOCKET, DaemonReply, DaemonRequest, Transport, UnixSocketTransport};
