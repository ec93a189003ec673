//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, files, timers) from page
//! and component logic.

#[cfg(feature = "csr")]
pub mod file;
pub mod storage;
pub mod timer;
