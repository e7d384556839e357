//! In-memory mock data source.
//!
//! Stands in for a real scheduling backend: slots are generated on the fly,
//! bookings are accepted without being stored, and every call sleeps briefly
//! to behave like a network request. Nothing here persists across reloads.

use chrono::{Duration, NaiveDate, NaiveTime};
use gloo_timers::future::TimeoutFuture;
use shared_types::{BookingConfirmation, BookingRequest, TimeSlot};

use super::{DataSourceError, Entropy};

/// How many availability hints the calendar shows.
pub const AVAILABLE_DATE_SAMPLES: usize = 15;
/// Hints fall within the next this-many days.
pub const AVAILABLE_DATE_WINDOW_DAYS: u32 = 30;

const OPENING_HOUR: u32 = 9;
const CLOSING_HOUR: u32 = 17;
const SLOT_MINUTES: i64 = 30;
const SLOT_KEEP_PROBABILITY: f64 = 0.6;

const MIN_LATENCY_MS: u32 = 300;
const LATENCY_JITTER_MS: u32 = 500;

/// Sample calendar dates to mark as "has availability".
///
/// Uniform with replacement, so duplicates are possible and kept as-is; the
/// hints are cosmetic and never consulted when fetching or booking slots.
pub fn sample_available_dates(today: NaiveDate, entropy: &mut Entropy) -> Vec<NaiveDate> {
    (0..AVAILABLE_DATE_SAMPLES)
        .map(|_| today + Duration::days(i64::from(entropy.below(AVAILABLE_DATE_WINDOW_DAYS))))
        .collect()
}

/// Generate the open slots for one day: half-hour intervals across business
/// hours, each kept with a fixed probability, in ascending order.
pub fn generate_slots(date: NaiveDate, entropy: &mut Entropy) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    let mut start = match NaiveTime::from_hms_opt(OPENING_HOUR, 0, 0) {
        Some(t) => t,
        None => return slots,
    };
    let closing = match NaiveTime::from_hms_opt(CLOSING_HOUR, 0, 0) {
        Some(t) => t,
        None => return slots,
    };

    while start < closing {
        let end = start + Duration::minutes(SLOT_MINUTES);
        if entropy.chance(SLOT_KEEP_PROBABILITY) {
            slots.push(TimeSlot::new(date, start, end));
        }
        start = end;
    }
    slots
}

/// Fetch the open slots for a date.
///
/// Asynchronous with simulated latency; the mock itself never fails, but the
/// contract is fallible so callers handle a real backend the same way.
pub async fn fetch_slots_for_date(date: NaiveDate) -> Result<Vec<TimeSlot>, DataSourceError> {
    simulate_latency().await;
    let mut entropy = Entropy::from_clock();
    Ok(generate_slots(date, &mut entropy))
}

/// Submit a booking for a slot. Accepts every well-formed request and hands
/// back a reference number.
pub async fn submit_booking(
    request: BookingRequest,
) -> Result<BookingConfirmation, DataSourceError> {
    simulate_latency().await;

    if request.client_name.trim().is_empty() || request.client_email.trim().is_empty() {
        return Err(DataSourceError::Submission(
            "name and email are required".to_string(),
        ));
    }

    let mut entropy = Entropy::from_clock();
    Ok(BookingConfirmation {
        reference: format!("BK-{:06}", entropy.below(1_000_000)),
        slot: request.slot,
    })
}

async fn simulate_latency() {
    let mut entropy = Entropy::from_clock();
    TimeoutFuture::new(MIN_LATENCY_MS + entropy.below(LATENCY_JITTER_MS)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn samples_exactly_fifteen_dates_within_the_window() {
        let today = date(2024, 1, 1);
        for seed in 1..=20 {
            let dates = sample_available_dates(today, &mut Entropy::seeded(seed));
            assert_eq!(dates.len(), AVAILABLE_DATE_SAMPLES);
            for d in &dates {
                assert!(*d >= today, "{d} before today");
                assert!(*d <= today + Duration::days(30), "{d} past the window");
            }
        }
    }

    #[test]
    fn duplicate_sampled_dates_are_not_deduplicated() {
        // With 15 draws from 30 days a collision is near-certain; scan a few
        // seeds and require at least one to keep a duplicate.
        let today = date(2024, 1, 1);
        let found = (1..=10).any(|seed| {
            let mut dates = sample_available_dates(today, &mut Entropy::seeded(seed));
            let total = dates.len();
            dates.sort();
            dates.dedup();
            dates.len() < total
        });
        assert!(found, "expected at least one seed to produce duplicates");
    }

    #[test]
    fn generated_slots_stay_inside_business_hours() {
        let slots = generate_slots(date(2024, 3, 15), &mut Entropy::seeded(9));
        let opening = NaiveTime::from_hms_opt(OPENING_HOUR, 0, 0).unwrap();
        let closing = NaiveTime::from_hms_opt(CLOSING_HOUR, 0, 0).unwrap();
        assert!(!slots.is_empty());
        for slot in &slots {
            assert!(slot.start_time >= opening);
            assert!(slot.end_time <= closing);
            assert_eq!(
                slot.end_time - slot.start_time,
                Duration::minutes(SLOT_MINUTES)
            );
        }
    }

    #[test]
    fn generated_slots_are_sorted_and_carry_the_requested_date() {
        let day = date(2024, 3, 15);
        let slots = generate_slots(day, &mut Entropy::seeded(11));
        for pair in slots.windows(2) {
            assert!(pair[0].start_time < pair[1].start_time);
        }
        assert!(slots.iter().all(|s| s.date == day));
    }

    #[test]
    fn same_seed_generates_the_same_day() {
        let day = date(2024, 6, 1);
        let a = generate_slots(day, &mut Entropy::seeded(77));
        let b = generate_slots(day, &mut Entropy::seeded(77));
        assert_eq!(a, b);
    }
}
