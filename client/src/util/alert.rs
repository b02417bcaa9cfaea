//! Blocking browser alert for client-side validation failures.

/// Show `message` in a modal `window.alert`. No-op outside the browser.
pub fn show(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::warn!("alert: {message}");
    }
}
