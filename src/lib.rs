//! # stockmanager
//!
//! Session and API-access layer for the stock manager front-end.
//!
//! This crate is UI-agnostic: it owns the wire types, the bearer-token session
//! abstraction, the API client over a pluggable [`transport::Transport`], the
//! login/registration state machines, dashboard state with invalidation, and
//! the route guard. The `client` crate renders it with Leptos in the browser;
//! the `cli` crate drives it from a terminal.

pub mod api;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod feedback;
pub mod guard;
pub mod image;
pub mod invalidation;
pub mod messages;
pub mod session;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use api::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use session::{MemorySession, SessionStore};
pub use transport::Transport;
