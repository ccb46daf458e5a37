// travelmate-ui/src/hooks/persistence.rs
//!
//! localStorage access for the current-user record and the booking list.
//! Absent, unavailable, or malformed data degrades to "not logged in" /
//! an empty list; write failures are logged and otherwise ignored.

use leptos::window;
use travelmate_core::{BookingRecord, CurrentUser};

use crate::config::{BOOKINGS_STORAGE_KEY, CURRENT_USER_STORAGE_KEY};

/// Load the current user written by the login flow.
/// Returns None if no record exists, parsing fails, or storage is
/// unavailable.
pub fn load_current_user() -> Option<CurrentUser> {
    let storage = window().local_storage().ok()??;
    let json = storage.get_item(CURRENT_USER_STORAGE_KEY).ok()??;

    match serde_json::from_str::<CurrentUser>(&json) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Ignoring unreadable current-user record: {e}");
            None
        }
    }
}

/// Storage for the persisted booking list.
///
/// Callers only depend on `append`; an indexed backend can replace the
/// whole-list rewrite without touching them.
pub trait BookingRepository {
    /// All persisted bookings, oldest first.
    fn load_all(&self) -> Vec<BookingRecord>;

    /// Persist `record` at the end of the list.
    fn append(&self, record: BookingRecord);
}

/// Booking list held under a single localStorage key. Every `append` reads
/// the whole list, pushes, and rewrites it; the write is not atomic.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBookings;

impl BookingRepository for LocalStorageBookings {
    fn load_all(&self) -> Vec<BookingRecord> {
        load_bookings().unwrap_or_default()
    }

    fn append(&self, record: BookingRecord) {
        let mut bookings = self.load_all();
        bookings.push(record);
        save_bookings(&bookings);
    }
}

fn load_bookings() -> Option<Vec<BookingRecord>> {
    let storage = window().local_storage().ok()??;
    let json = storage.get_item(BOOKINGS_STORAGE_KEY).ok()??;

    match serde_json::from_str::<Vec<BookingRecord>>(&json) {
        Ok(bookings) => Some(bookings),
        Err(e) => {
            log::warn!("Ignoring unreadable booking list: {e}");
            None
        }
    }
}

fn save_bookings(bookings: &[BookingRecord]) {
    let Ok(Some(storage)) = window().local_storage() else {
        return;
    };

    match serde_json::to_string(bookings) {
        Ok(json) => {
            if let Err(e) = storage.set_item(BOOKINGS_STORAGE_KEY, &json) {
                log::warn!("Failed to save booking list: {e:?}");
            }
        }
        Err(e) => {
            log::warn!("Failed to serialize booking list: {e}");
        }
    }
}
