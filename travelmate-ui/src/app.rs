//! App shell: the booking page, wired to the recorder and popup controller.

use leptos::*;

use crate::components::PopupHost;
use crate::config::{ServiceOffer, SERVICE_OFFERS};
use crate::hooks::{record_booking, BookingOutcome, LocalStorageBookings};
use crate::popup::PopupController;

#[component]
pub fn App() -> impl IntoView {
    // One controller and one repository for the whole page, passed down
    // explicitly to everything that needs them.
    let popups = PopupController::new();
    let bookings = LocalStorageBookings;

    view! {
        <div class="min-h-screen bg-slate-900 text-white">
            <header class="px-6 py-4 border-b border-white/10">
                <h1 class="text-lg font-semibold">"TravelMate"</h1>
            </header>
            <main class="max-w-3xl mx-auto p-6 grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                {SERVICE_OFFERS
                    .iter()
                    .map(|offer| view! { <ServiceCard offer=offer popups=popups bookings=bookings/> })
                    .collect_view()}
            </main>
            <PopupHost controller=popups/>
        </div>
    }
}

/// One bookable service. The Book button runs the recorder; a successful
/// booking is confirmed through the popup controller, while the not-logged-in
/// path has already notified and scheduled the login redirect.
#[component]
fn ServiceCard(
    offer: &'static ServiceOffer,
    popups: PopupController,
    bookings: LocalStorageBookings,
) -> impl IntoView {
    let on_book = move |_| match record_booking(&bookings, &offer.details()) {
        BookingOutcome::Booked(record) => {
            log::debug!("Booked {}", record.id);
            popups.show_booking_success();
        }
        BookingOutcome::LoginRequired => {}
    };

    let route = if offer.from.is_empty() {
        None
    } else {
        Some(format!("{} → {}", offer.from, offer.to))
    };

    view! {
        <div class="rounded-lg border border-white/10 bg-black/40 p-4 space-y-2">
            <div class="text-xs uppercase tracking-wide text-gray-400">{offer.kind}</div>
            <div class="text-white text-sm font-medium">{offer.title}</div>
            {route.map(|route| view! { <div class="text-gray-300 text-sm">{route}</div> })}
            <div class="flex items-center justify-between pt-2">
                <span class="text-emerald-400 text-sm">{offer.price}</span>
                <button
                    class="px-3 py-1.5 rounded-lg bg-white/20 text-white text-sm hover:bg-white/30 transition-colors"
                    on:click=on_book
                >
                    "Book"
                </button>
            </div>
        </div>
    }
}
