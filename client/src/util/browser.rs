//! Thin wrappers over browser globals used by pages.
//!
//! Every helper is hydrate-only in effect; SSR paths no-op so server
//! rendering stays deterministic.

/// Full-page navigation to `path`. Returns `false` if the browser refused.
pub fn redirect(path: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let navigated = web_sys::window().is_some_and(|w| w.location().set_href(path).is_ok());
        if !navigated {
            log::warn!("redirect to {path} failed");
        }
        navigated
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        false
    }
}

/// Ask the user to confirm a destructive action. Declines outside the browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Show a blocking notice.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Stand-in for a network round trip.
#[cfg(feature = "hydrate")]
pub async fn simulated_delay(millis: u32) {
    if millis > 0 {
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}
