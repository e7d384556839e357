use chrono::NaiveDate;
use leptos::prelude::*;
use shared_types::TimeSlot;
use thaw::*;

use crate::state::SlotsState;

/// Clickable list of the open slots for one date.
///
/// The currently picked slot is rendered as primary; clicking any slot hands
/// it up through `on_select`. Load failures render the same quiet empty state
/// as a day with nothing open — there is no error banner by design.
#[component]
pub fn TimeSlots(
    #[prop(into)] date: Signal<NaiveDate>,
    #[prop(into)] slots: Signal<SlotsState>,
    #[prop(into)] selected: Signal<Option<TimeSlot>>,
    on_select: impl Fn(TimeSlot) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <div class="time-slots">
            {move || match slots.get() {
                SlotsState::Loading => view! {
                    <div class="loading-container">
                        <Spinner size=SpinnerSize::Large/>
                        <p class="loading-message">"Loading available times..."</p>
                    </div>
                }
                .into_any(),
                SlotsState::Loaded(slots) if slots.is_empty() => view! {
                    <div class="time-slots-empty">
                        <p>
                            {format!(
                                "No available time slots for {}.",
                                date.get().format("%B %-d, %Y"),
                            )}
                        </p>
                        <p class="time-slots-suggestion">"Please try selecting a different date."</p>
                    </div>
                }
                .into_any(),
                SlotsState::Loaded(slots) => {
                    let current = selected.get();
                    view! {
                        <div class="time-slots-grid">
                            {slots
                                .into_iter()
                                .map(|slot| {
                                    let label = slot.label();
                                    let is_picked = current.as_ref() == Some(&slot);
                                    view! {
                                        <Button
                                            class="time-slot-button"
                                            appearance=if is_picked {
                                                ButtonAppearance::Primary
                                            } else {
                                                ButtonAppearance::Secondary
                                            }
                                            on_click=move |_| on_select(slot.clone())
                                        >
                                            <span class="time-slot-label">{label}</span>
                                        </Button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }
                SlotsState::Failed(_) => view! {
                    <div class="time-slots-empty">
                        <p>"No time slots to show right now."</p>
                        <p class="time-slots-suggestion">"Please try selecting a different date."</p>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
