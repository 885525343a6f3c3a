//! Core business logic for the salon workspace.
//!
//! This crate contains pure business logic with ZERO store or UI dependencies.
//! Raw documents come in as JSON values; everything else is computed here.
//!
//! # Modules
//!
//! - `earnings` - Per-record derived values, period totals, commission splits
//! - `period` - Month and full-year period windows
//! - `sheet` - Earnings sheet layout, screen/print rendering, CSV export
//! - `staff` - Staff records and the technician roster
//! - `expense` - Expense records and per-period summaries
//! - `calendar` - Booking calendar ranges and appointment grids
//! - `live` - Subscription-scoped live earnings view
//! - `document` - Fail-soft coercion of raw store fields

pub mod calendar;
pub mod document;
pub mod earnings;
pub mod expense;
pub mod live;
pub mod period;
pub mod sheet;
pub mod staff;
