pub mod booking;
pub mod user;

pub use booking::{booking_id, BookingRecord, ServiceDetails, STATUS_CONFIRMED};
pub use user::CurrentUser;
