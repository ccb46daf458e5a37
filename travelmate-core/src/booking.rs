//! Booking record model and identifier generation.
//!
//! The serialized form is the localStorage wire format of the booking list,
//! so field names stay camelCase and no field is ever absent. Construction
//! takes the clock values as arguments; callers in the browser supply them
//! from `js_sys::Date`.

use serde::{Deserialize, Serialize};

/// Status every record carries from creation on. Records are never mutated,
/// so no other status value exists.
pub const STATUS_CONFIRMED: &str = "confirmed";

/// Caller-supplied description of the service being booked.
///
/// Every field is optional; absent or empty fields are replaced with
/// documented defaults when the record is built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceDetails {
    /// Service type code, e.g. "flight", "hotel", "train".
    pub kind: Option<String>,
    pub title: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    /// Travel date as entered by the user.
    pub date: Option<String>,
    pub time: Option<String>,
    pub price: Option<String>,
}

/// One confirmed service reservation, as persisted in the booking list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub from: String,
    pub to: String,
    /// Timestamp of the booking request (ISO 8601).
    pub date: String,
    pub travel_date: String,
    pub time: String,
    pub price: String,
    pub status: String,
    pub booking_time: String,
}

impl BookingRecord {
    /// Build a record for `user_id` from the given service details.
    ///
    /// `now_ms` and `now_iso` are the same instant as a millisecond
    /// timestamp and an ISO 8601 string.
    pub fn new(service: &ServiceDetails, user_id: &str, now_ms: u64, now_iso: &str) -> Self {
        BookingRecord {
            id: booking_id(service.kind.as_deref(), now_ms),
            user_id: user_id.to_string(),
            kind: or_default(&service.kind, "service"),
            title: or_default(&service.title, "Service Booking"),
            from: or_default(&service.from, ""),
            to: or_default(&service.to, ""),
            date: now_iso.to_string(),
            travel_date: or_default(&service.date, ""),
            time: or_default(&service.time, ""),
            price: or_default(&service.price, "₹0"),
            status: STATUS_CONFIRMED.to_string(),
            booking_time: now_iso.to_string(),
        }
    }
}

/// Empty strings count as absent, so records already in storage and new
/// ones default the same way.
fn or_default(value: &Option<String>, default: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Generate a booking identifier: the uppercased first two characters of the
/// raw type string ("BK" when absent or empty) followed by the millisecond
/// timestamp.
///
/// Not globally unique: two bookings with the same type in the same
/// millisecond collide. Known limitation, accepted.
pub fn booking_id(kind: Option<&str>, now_ms: u64) -> String {
    let prefix = kind
        .map(str::to_uppercase)
        .filter(|upper| !upper.is_empty())
        .map(|upper| upper.chars().take(2).collect())
        .unwrap_or_else(|| "BK".to_string());
    format!("{prefix}{now_ms}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_id_uses_first_two_uppercased_chars() {
        assert_eq!(booking_id(Some("flight"), 1700000000000), "FL1700000000000");
        assert_eq!(booking_id(Some("hotel"), 1700000000000), "HO1700000000000");
    }

    #[test]
    fn booking_id_falls_back_to_bk() {
        assert_eq!(booking_id(None, 42), "BK42");
        assert_eq!(booking_id(Some(""), 42), "BK42");
    }

    #[test]
    fn booking_id_keeps_short_types_unpadded() {
        assert_eq!(booking_id(Some("f"), 42), "F42");
    }

    #[test]
    fn booking_id_same_type_same_millisecond_collides() {
        // Documented limitation: timestamp-based ids are not unique.
        assert_eq!(
            booking_id(Some("flight"), 1700000000000),
            booking_id(Some("flight"), 1700000000000)
        );
    }
}
