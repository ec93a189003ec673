//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (API calls, navigation) and
//! delegates dashboard rendering details to `components`.

pub mod dashboard;
pub mod login;
pub mod register;
