use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{BookingRequest, TimeSlot};
use thaw::*;

use crate::api;

/// Booking details form for one chosen slot.
///
/// Owns its field state and validation; the parent only learns the outcome
/// through `on_success` / `on_cancel`. Submission goes to the mock data
/// source, so every valid request is confirmed.
#[component]
pub fn BookingForm(
    // Named `time_slot` because `slot` is reserved attribute syntax in
    // leptos's `view!` macro and cannot be passed as a component prop.
    time_slot: TimeSlot,
    on_success: impl Fn() + 'static + Copy + Send + Sync,
    on_cancel: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let slot = time_slot;
    let client_name = RwSignal::new(String::new());
    let client_email = RwSignal::new(String::new());
    let client_phone = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let is_submitting = RwSignal::new(false);
    let submission_error = RwSignal::new(None::<String>);

    let is_form_valid = move || {
        !client_name.get().trim().is_empty() && !client_email.get().trim().is_empty()
    };

    let is_button_disabled = Memo::new(move |_| !is_form_valid() || is_submitting.get());

    let slot_heading = slot.date_label();
    let slot_times = slot.label();

    let handle_submit = move || {
        let slot = slot.clone();
        is_submitting.set(true);
        submission_error.set(None);

        let request = BookingRequest {
            slot,
            client_name: client_name.get(),
            client_email: client_email.get(),
            client_phone: if client_phone.get().trim().is_empty() {
                None
            } else {
                Some(client_phone.get())
            },
            notes: if notes.get().trim().is_empty() {
                None
            } else {
                Some(notes.get())
            },
        };

        spawn_local(async move {
            match api::submit_booking(request).await {
                Ok(confirmation) => {
                    leptos::logging::log!("booking confirmed: {}", confirmation.reference);
                    is_submitting.set(false);
                    on_success();
                }
                Err(e) => {
                    is_submitting.set(false);
                    submission_error.set(Some(format!("Failed to submit booking: {}", e)));
                }
            }
        });
    };

    view! {
        <div class="booking-form">
            <div class="slot-summary">
                <p class="slot-summary-date">{slot_heading}</p>
                <p class="slot-summary-time">{slot_times}</p>
            </div>

            <form
                class="booking-form-content"
                on:submit=move |ev| {
                    ev.prevent_default();
                    if is_form_valid() {
                        handle_submit();
                    }
                }
            >
                <div class="form-section">
                    <div class="form-group">
                        <label for="client-name">"Full Name *"</label>
                        <Input id="client-name" placeholder="Your full name" value=client_name/>
                    </div>
                    <div class="form-group">
                        <label for="client-email">"Email Address *"</label>
                        <Input
                            id="client-email"
                            input_type=InputType::Email
                            placeholder="your@email.com"
                            value=client_email
                        />
                    </div>
                    <div class="form-group">
                        <label for="client-phone">"Phone Number"</label>
                        <Input
                            id="client-phone"
                            input_type=InputType::Tel
                            placeholder="(555) 123-4567"
                            value=client_phone
                        />
                    </div>
                    <div class="form-group">
                        <label for="notes">"Notes"</label>
                        <Textarea
                            id="notes"
                            placeholder="Anything we should know ahead of time..."
                            value=notes
                        />
                    </div>
                </div>

                {move || {
                    submission_error
                        .get()
                        .map(|error| {
                            view! {
                                <div class="error-message">
                                    <p>{error}</p>
                                </div>
                            }
                        })
                }}

                <div class="form-actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel()>
                        "Cancel"
                    </Button>
                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::from(is_button_disabled)
                        loading=is_submitting
                    >
                        {move || if is_submitting.get() { "Booking..." } else { "Confirm Booking" }}
                    </Button>
                </div>
            </form>
        </div>
    }
}
