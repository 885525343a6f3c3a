//! Period selection errors.

use thiserror::Error;

/// Errors that can occur while choosing a reporting period.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    /// Selector index outside 0-12.
    #[error("Invalid period selector: {0} (expected 0-11 for a month or 12 for the full year)")]
    InvalidSelector(u32),

    /// Selector text not recognised.
    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    /// Year outside the calendar range.
    #[error("Year {0} is out of range")]
    YearOutOfRange(i32),
}
