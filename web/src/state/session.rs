//! Booking page session state.
//!
//! All of the page's mutable state lives in [`BookingSession`], a plain value
//! owned by the view-controller and mutated synchronously by its handlers.
//! Asynchronous slot fetches run outside this module: each state transition
//! that needs fresh data hands back a [`FetchTicket`], and the caller applies
//! the eventual result through [`BookingSession::apply_fetch`]. Results for
//! superseded tickets are discarded, so the slot list always reflects the most
//! recently selected date even when responses resolve out of order.

use chrono::NaiveDate;
use shared_types::TimeSlot;

use crate::api::DataSourceError;

/// Lifecycle of the slot list for the currently selected date.
///
/// Replaced wholesale on every date change or successful booking; never
/// partially updated.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotsState {
    Loading,
    Loaded(Vec<TimeSlot>),
    Failed(String),
}

impl SlotsState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SlotsState::Loading)
    }

    /// The visible slots; empty while loading or after a failure.
    pub fn slots(&self) -> &[TimeSlot] {
        match self {
            SlotsState::Loaded(slots) => slots,
            SlotsState::Loading | SlotsState::Failed(_) => &[],
        }
    }
}

/// Handle for one outstanding slot fetch.
///
/// Carries the date to fetch and the sequence number that decides whether the
/// response is still current when it lands. Background tickets come from the
/// post-booking refresh, which keeps the old list on failure instead of
/// reporting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    date: NaiveDate,
    background: bool,
}

impl FetchTicket {
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// The view-controller's session state: selected date, slot list, current
/// pick, and modal visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSession {
    selected_date: NaiveDate,
    slots: SlotsState,
    selected_slot: Option<TimeSlot>,
    modal_open: bool,
    latest_seq: u64,
}

impl BookingSession {
    /// Initial state at mount: today selected, slots loading, modal closed.
    /// The returned ticket drives the first fetch.
    pub fn new(today: NaiveDate) -> (Self, FetchTicket) {
        let mut session = Self {
            selected_date: today,
            slots: SlotsState::Loading,
            selected_slot: None,
            modal_open: false,
            latest_seq: 0,
        };
        let ticket = session.issue(false);
        (session, ticket)
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn slots(&self) -> &SlotsState {
        &self.slots
    }

    pub fn selected_slot(&self) -> Option<&TimeSlot> {
        self.selected_slot.as_ref()
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    /// The user picked a date: clear the current slot pick, drop the old list,
    /// and issue a foreground fetch. Modal state is left untouched.
    pub fn select_date(&mut self, date: NaiveDate) -> FetchTicket {
        self.selected_date = date;
        self.selected_slot = None;
        self.slots = SlotsState::Loading;
        self.issue(false)
    }

    /// The user clicked a slot: remember it and open the booking modal. Any
    /// slot handed up by the list is accepted as-is.
    pub fn pick_slot(&mut self, slot: TimeSlot) {
        self.selected_slot = Some(slot);
        self.modal_open = true;
    }

    /// The booking form reported success: close the modal, clear the pick, and
    /// issue a background refresh for the still-selected date.
    pub fn booking_succeeded(&mut self) -> FetchTicket {
        self.modal_open = false;
        self.selected_slot = None;
        self.issue(true)
    }

    /// The modal was dismissed without booking. The stale pick is kept until
    /// the next date, slot, or booking event overwrites it, so the form does
    /// not empty out mid-close.
    pub fn dismiss_modal(&mut self) {
        self.modal_open = false;
    }

    /// Apply a finished fetch. Returns false when the ticket has been
    /// superseded, in which case the response is discarded untouched.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<TimeSlot>, DataSourceError>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            return false;
        }
        match result {
            Ok(slots) => self.slots = SlotsState::Loaded(slots),
            Err(err) => {
                // A failed background refresh keeps the previous list; the
                // caller has already logged the error.
                if !ticket.background {
                    self.slots = SlotsState::Failed(err.to_string());
                }
            }
        }
        true
    }

    fn issue(&mut self, background: bool) -> FetchTicket {
        self.latest_seq += 1;
        FetchTicket {
            seq: self.latest_seq,
            date: self.selected_date,
            background,
        }
    }
}
