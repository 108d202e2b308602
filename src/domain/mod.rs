//! Domain models for appcenter
//!
//! This module contains pure domain objects representing core business entities.
//! These types are free of transport concerns and enforce their own invariants.

pub mod app;
pub mod app_id;

pub use app::{App, VersionedApp};
pub use app_id::{AppId, StoreQuery};
