use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A bookable time interval on a given date.
///
/// Slots are immutable values produced by the data source; the `id` uniquely
/// identifies the interval and doubles as a stable key for rendering.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl TimeSlot {
    pub fn new(date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            id: format!("{}T{}", date.format("%Y-%m-%d"), start_time.format("%H:%M")),
            date,
            start_time,
            end_time,
        }
    }

    /// Human-readable interval, e.g. "9:00 AM - 9:30 AM".
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format("%-I:%M %p"),
            self.end_time.format("%-I:%M %p")
        )
    }

    /// Long-form date for headings, e.g. "Monday, January 1, 2024".
    pub fn date_label(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

/// Details collected by the booking form for a chosen slot.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BookingRequest {
    pub slot: TimeSlot,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub notes: Option<String>,
}

/// Acknowledgement returned by the data source for an accepted booking.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BookingConfirmation {
    pub reference: String,
    pub slot: TimeSlot,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(h: u32, m: u32) -> TimeSlot {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let start = NaiveTime::from_hms_opt(h, m, 0).unwrap();
        let end = start + chrono::Duration::minutes(30);
        TimeSlot::new(date, start, end)
    }

    #[test]
    fn slot_id_is_date_and_start_time() {
        assert_eq!(slot(9, 0).id, "2024-01-01T09:00");
        assert_eq!(slot(14, 30).id, "2024-01-01T14:30");
    }

    #[test]
    fn label_uses_twelve_hour_clock() {
        assert_eq!(slot(9, 0).label(), "9:00 AM - 9:30 AM");
        assert_eq!(slot(13, 30).label(), "1:30 PM - 2:00 PM");
    }

    #[test]
    fn date_label_is_long_form() {
        assert_eq!(slot(9, 0).date_label(), "Monday, January 1, 2024");
    }

    #[test]
    fn slots_with_same_interval_compare_equal() {
        assert_eq!(slot(10, 0), slot(10, 0));
        assert_ne!(slot(10, 0), slot(10, 30));
    }
}
