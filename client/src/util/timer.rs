//! Async delays for feedback expiry and post-registration redirect.

use std::time::Duration;

/// Resolve after `delay`. Native builds resolve immediately.
pub async fn sleep(delay: Duration) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(delay).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = delay;
    }
}
