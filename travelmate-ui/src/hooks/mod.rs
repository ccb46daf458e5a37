mod persistence;
mod use_booking;

pub use persistence::{load_current_user, BookingRepository, LocalStorageBookings};
pub use use_booking::{record_booking, BookingOutcome};
