//! Reporting period selection.

pub mod error;
pub mod window;

pub use error::PeriodError;
pub use window::{Dated, PeriodOption, PeriodSelector, PeriodWindow};
