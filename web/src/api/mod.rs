pub mod entropy;
pub mod mock;

pub use entropy::Entropy;
pub use mock::{fetch_slots_for_date, sample_available_dates, submit_booking};

use thiserror::Error;

/// Failures surfaced by the slot data source.
///
/// Fetch errors are logged at the request site and never shown to the user;
/// submission errors are rendered inline by the booking form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataSourceError {
    #[error("slot lookup failed: {0}")]
    SlotFetch(String),
    #[error("booking submission failed: {0}")]
    Submission(String),
}
