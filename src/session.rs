//! Bearer-token session storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one token per store. The browser keeps it in `localStorage`, the
//! CLI in a file, tests in memory. Components receive a store explicitly
//! instead of reaching for global storage, so a fake can be injected.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Storage key used by durable backends that are key-value shaped.
pub const TOKEN_KEY: &str = "token";

/// Single-token session store. Last writer wins; no expiry tracking.
pub trait SessionStore {
    /// Current token, or `None` when absent or storage is unavailable.
    fn get(&self) -> Option<String>;

    /// Persist `token`, replacing any previous one.
    fn set(&self, token: &str);

    /// Remove the stored token.
    fn clear(&self);
}

impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) {
        (**self).set(token);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) {
        (**self).set(token);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// In-memory store. Clones share the same cell.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    token: Arc<Mutex<Option<String>>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let session = Self::new();
        session.set(token);
        session
    }
}

impl SessionStore for MemorySession {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// `Authorization` header value for `token`.
///
/// An absent token is still sent, as `Bearer null`; the API decides what to
/// do with it.
pub fn bearer_header(token: Option<&str>) -> String {
    format!("Bearer {}", token.unwrap_or("null"))
}
