//! Page navigation side effects.

use leptos::{set_timeout, window};
use std::time::Duration;

/// Navigate the current document to `url`.
pub fn redirect_to(url: &str) {
    if let Err(e) = window().location().set_href(url) {
        log::warn!("Failed to navigate to {url}: {e:?}");
    }
}

/// Navigate to `url` after `delay`. Fire-and-forget; the pending redirect
/// cannot be cancelled.
pub fn redirect_after(url: &'static str, delay: Duration) {
    set_timeout(move || redirect_to(url), delay);
}
