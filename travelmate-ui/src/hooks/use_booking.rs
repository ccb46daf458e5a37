//! Booking recorder: the flow behind every Book button.

use std::time::Duration;

use leptos::window;
use travelmate_core::{BookingRecord, ServiceDetails};

use crate::config::{LOGIN_PAGE, LOGIN_REDIRECT_DELAY_MS};
use crate::hooks::persistence::{load_current_user, BookingRepository};
use crate::navigation;

/// What came of a booking attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum BookingOutcome {
    /// No current user: the user was notified and a login redirect is
    /// pending. Nothing was persisted.
    LoginRequired,
    /// The record was appended to the persisted list.
    Booked(BookingRecord),
}

/// Book `service` for the currently logged-in user.
///
/// With no stored user this notifies, schedules a redirect to the login
/// page, and leaves the booking list untouched. Otherwise the user is
/// notified synchronously and the new record is appended to `repo`.
pub fn record_booking(repo: &impl BookingRepository, service: &ServiceDetails) -> BookingOutcome {
    let Some(user) = load_current_user() else {
        notify("Please login to book trips. Redirecting to login page...");
        navigation::redirect_after(LOGIN_PAGE, Duration::from_millis(LOGIN_REDIRECT_DELAY_MS));
        return BookingOutcome::LoginRequired;
    };

    notify("Trip booked successfully!");

    // One reading of the clock feeds both the id and the timestamps.
    let now = js_sys::Date::new_0();
    let now_iso = String::from(now.to_iso_string());
    let record = BookingRecord::new(service, user.user_id(), now.get_time() as u64, &now_iso);

    repo.append(record.clone());
    log::info!("Recorded booking {} for user {}", record.id, record.user_id);

    BookingOutcome::Booked(record)
}

/// Blocking browser alert.
fn notify(message: &str) {
    let _ = window().alert_with_message(message);
}
