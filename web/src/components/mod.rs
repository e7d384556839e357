pub mod booking_form;
pub mod calendar;
pub mod header;
pub mod time_slots;

// Re-export commonly used components
pub use booking_form::BookingForm;
pub use calendar::Calendar;
pub use header::Header;
pub use time_slots::TimeSlots;
