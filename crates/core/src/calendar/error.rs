//! Calendar errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Calendar errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// View name not recognised.
    #[error("Unknown calendar view: {0}")]
    UnknownView(String),

    /// The view range runs past the supported calendar.
    #[error("Calendar range out of bounds near {0}")]
    OutOfRange(NaiveDate),
}
