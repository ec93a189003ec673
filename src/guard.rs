//! Route gate for the dashboard.
//!
//! Presence check only: no expiry, no server round trip. The remote API is
//! what actually enforces access.

use crate::session::SessionStore;

pub const LOGIN_ROUTE: &str = "/";
pub const REGISTER_ROUTE: &str = "/register";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    RedirectToLogin,
}

pub fn check<S: SessionStore + ?Sized>(session: &S) -> Access {
    if session.get().is_some() { Access::Granted } else { Access::RedirectToLogin }
}
