pub mod session;

pub use session::{BookingSession, FetchTicket, SlotsState};
