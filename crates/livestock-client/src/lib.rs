//! Data loading for the livestock dashboard.
//!
//! This crate sits between the REST API and `livestock-core`: it fetches
//! the animal and health collections, hands the raw payloads to ingestion
//! and keeps the newest snapshot of each collection.
//!
//! The loader only depends on [`CollectionSource`]; the `http` feature adds
//! a `reqwest`-backed implementation.

pub mod config;
pub mod loader;
pub mod resources;
pub mod snapshot;
pub mod source;

#[cfg(feature = "http")]
pub mod http;

pub use config::*;
pub use loader::*;
pub use snapshot::*;
pub use source::*;

#[cfg(feature = "http")]
pub use http::HttpSource;
