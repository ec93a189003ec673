//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` adapts `gloo-net` to the core `Transport` trait. [`Api`] is the
//! concrete client every page pulls from context.

pub mod transport;

use stockmanager::{ApiClient, ApiConfig};

use crate::util::storage::LocalStorageSession;
use transport::GlooTransport;

/// API client wired to `fetch` and `localStorage`.
pub type Api = ApiClient<GlooTransport, LocalStorageSession>;

pub fn build_api(config: ApiConfig) -> Api {
    ApiClient::new(config, GlooTransport, LocalStorageSession)
}
