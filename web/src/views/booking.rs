use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::TimeSlot;
use thaw::*;

use crate::api::{self, Entropy};
use crate::components::{BookingForm, Calendar, Header, TimeSlots};
use crate::state::{BookingSession, FetchTicket};

/// The booking page view-controller.
///
/// Owns the whole session state ([`BookingSession`]) and wires the three leaf
/// collaborators together: the calendar reports date picks, the slot list
/// reports slot picks, and the booking form reports success or cancel. Slot
/// fetches are keyed by ticket, so a response that arrives after the user has
/// moved on is dropped instead of overwriting fresher state.
#[component]
pub fn BookingPage() -> impl IntoView {
    let today = Local::now().date_naive();
    let (initial, first_ticket) = BookingSession::new(today);
    let session = RwSignal::new(initial);

    // Cosmetic availability hints, sampled once at mount. Not tied to real
    // slot data and never consulted when fetching or booking.
    let available_dates = RwSignal::new({
        let mut entropy = Entropy::from_clock();
        api::sample_available_dates(today, &mut entropy)
    });

    let run_fetch = move |ticket: FetchTicket| {
        spawn_local(async move {
            let result = api::fetch_slots_for_date(ticket.date()).await;
            if let Err(ref e) = result {
                leptos::logging::error!("failed to fetch slots for {}: {}", ticket.date(), e);
            }
            session.update(|s| {
                s.apply_fetch(ticket, result);
            });
        });
    };

    run_fetch(first_ticket);

    let handle_select_date = move |date: NaiveDate| {
        let ticket = session.write().select_date(date);
        run_fetch(ticket);
    };

    let handle_select_slot = move |slot: TimeSlot| {
        session.write().pick_slot(slot);
    };

    let handle_booking_success = move || {
        // Background refresh of the still-selected date; no loading indicator.
        let ticket = session.write().booking_succeeded();
        run_fetch(ticket);
    };

    let handle_dismiss = move || {
        session.write().dismiss_modal();
    };

    let selected_date = Memo::new(move |_| session.read().selected_date());
    let slots_state = Signal::derive(move || session.read().slots().clone());
    let selected_slot = Signal::derive(move || session.read().selected_slot().cloned());
    let modal_open = Memo::new(move |_| session.read().modal_open());

    view! {
        <div class="booking-page">
            <Header/>

            <div class="booking-page-body">
                <div class="booking-intro">
                    <h1>"Book Your Appointment"</h1>
                    <p>
                        "Select a date and time to schedule your appointment. All appointments are confirmed instantly."
                    </p>
                </div>

                <div class="booking-cards">
                    <div class="booking-card">
                        <div class="booking-card-header">
                            <h2>"Select a Date"</h2>
                            <p class="booking-card-description">"Choose your preferred appointment date"</p>
                        </div>
                        <div class="booking-card-content">
                            <Calendar
                                selected_date=selected_date
                                highlighted_dates=available_dates
                                on_select=handle_select_date
                            />
                        </div>
                    </div>

                    <div class="booking-card">
                        <div class="booking-card-header">
                            <h2>"Select a Time"</h2>
                            <p class="booking-card-description">
                                {move || {
                                    format!(
                                        "Available time slots for {}",
                                        selected_date.get().format("%B %-d, %Y"),
                                    )
                                }}
                            </p>
                        </div>
                        <div class="booking-card-content">
                            <TimeSlots
                                date=selected_date
                                slots=slots_state
                                selected=selected_slot
                                on_select=handle_select_slot
                            />
                        </div>
                    </div>
                </div>
            </div>

            <div class=move || {
                if modal_open.get() { "booking-modal-overlay show" } else { "booking-modal-overlay" }
            }>
                <div class="booking-modal">
                    <div class="modal-header">
                        <h2>"Complete Your Booking"</h2>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| handle_dismiss()
                            class="close-button"
                        >
                            "×"
                        </Button>
                    </div>

                    <div class="modal-content">
                        // The form only mounts once a slot has been picked; a
                        // cancelled pick stays here until the next one replaces it.
                        {move || {
                            selected_slot
                                .get()
                                .map(|slot| {
                                    view! {
                                        <BookingForm
                                            time_slot=slot
                                            on_success=handle_booking_success
                                            on_cancel=handle_dismiss
                                        />
                                    }
                                })
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
