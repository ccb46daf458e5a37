//! Fixed storage keys, navigation destinations, and the service catalog.

use travelmate_core::ServiceDetails;

/// localStorage key the login flow stores the current user under.
/// Read-only to this crate.
pub const CURRENT_USER_STORAGE_KEY: &str = "travelmate_current_user";

/// localStorage key holding the serialized booking list.
pub const BOOKINGS_STORAGE_KEY: &str = "travelmate_bookings";

/// Login page shown when a booking is attempted with no current user.
pub const LOGIN_PAGE: &str = "login.html";

/// Home page the booking-success popup navigates to on confirm.
pub const HOME_PAGE: &str = "main.html";

/// Delay before the login redirect fires.
pub const LOGIN_REDIRECT_DELAY_MS: u64 = 1000;

/// A bookable service shown on the booking page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceOffer {
    /// Unique identifier
    pub id: &'static str,
    /// Service type code ("flight", "hotel", "train")
    pub kind: &'static str,
    /// Human-readable name for the card
    pub title: &'static str,
    /// Origin, empty when not applicable (hotels)
    pub from: &'static str,
    /// Destination, empty when not applicable
    pub to: &'static str,
    /// Departure / check-in time, empty when open-ended
    pub time: &'static str,
    pub price: &'static str,
}

impl ServiceOffer {
    /// The booking-recorder input for this offer. Empty catalog fields are
    /// passed as absent so the record defaults apply.
    pub fn details(&self) -> ServiceDetails {
        ServiceDetails {
            kind: filled(self.kind),
            title: filled(self.title),
            from: filled(self.from),
            to: filled(self.to),
            date: None,
            time: filled(self.time),
            price: filled(self.price),
        }
    }
}

fn filled(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Registry of bookable services.
pub static SERVICE_OFFERS: &[ServiceOffer] = &[
    ServiceOffer {
        id: "flight-del-bom",
        kind: "flight",
        title: "Delhi-Mumbai",
        from: "Delhi",
        to: "Mumbai",
        time: "06:15",
        price: "₹4500",
    },
    ServiceOffer {
        id: "hotel-taj-mumbai",
        kind: "hotel",
        title: "Taj Palace, Mumbai",
        from: "",
        to: "",
        time: "",
        price: "₹8900",
    },
    ServiceOffer {
        id: "train-rajdhani",
        kind: "train",
        title: "Rajdhani Express",
        from: "Delhi",
        to: "Kolkata",
        time: "16:50",
        price: "₹3200",
    },
];

/// Look up a service offer by ID.
pub fn get_offer(id: &str) -> Option<&'static ServiceOffer> {
    SERVICE_OFFERS.iter().find(|offer| offer.id == id)
}
