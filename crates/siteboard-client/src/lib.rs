//! # siteboard-client
//!
//! Async HTTP client for the site report API.
//!
//! - [`ApiClient`](api::ApiClient): fetches one category or a joined
//!   [`SiteSnapshot`](siteboard_common::types::SiteSnapshot) of all three.
//! - [`FetchError`](error::FetchError): classified failure of a fetch, with
//!   the user-facing message the dashboard displays.

pub mod api;
pub mod error;

pub use api::{ApiClient, SnapshotSource};
pub use error::{FailureKind, FetchError};
