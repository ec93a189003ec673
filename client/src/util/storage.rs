//! `localStorage`-backed session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives under the `token` key so it survives reloads. Outside the
//! browser (native tests) the store is always empty and writes are dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use stockmanager::SessionStore;
#[cfg(feature = "csr")]
use stockmanager::session::TOKEN_KEY;

/// Session store over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSession;

impl SessionStore for LocalStorageSession {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = storage() else {
                log::warn!("localStorage unavailable; token not saved");
                return;
            };
            if storage.set_item(TOKEN_KEY, token).is_err() {
                log::warn!("failed to write session token");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
