//! REST collaborator — HTTP client and per-entity API modules.
//!
//! One module per backend resource, mirroring the screen that drives it.
//! Every request goes through [`ApiClient`], which attaches the persisted
//! bearer token; each search client implements
//! [`crate::controller::PageFetcher`] so list controllers bind directly.

pub mod api;
pub mod auth;
pub mod candidates;
pub mod employees;
pub mod interviews;
pub mod jobs;
pub mod lookups;
pub mod offers;

pub use api::ApiClient;
