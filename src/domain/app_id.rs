//! Application identity

use std::fmt;

use serde::Serialize;

use crate::error::{Result, invalid_app_id};

/// Longest identity the snap namespace allows
const MAX_ID_LEN: usize = 64;

/// Identity of an application in the package namespace
///
/// Used as the join key when installed and store views are reconciled.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    /// Validate and wrap an identity
    pub fn parse(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if is_valid_id(&id) {
            Ok(Self(id))
        } else {
            Err(invalid_app_id(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && !id.starts_with('-')
        && !id.ends_with('-')
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Store search query: every app, or one exact identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreQuery {
    All,
    Exact(AppId),
}

impl StoreQuery {
    /// The value sent as the daemon's `name` parameter
    pub fn as_param(&self) -> &str {
        match self {
            StoreQuery::All => "*",
            StoreQuery::Exact(id) => id.as_str(),
        }
    }
}
