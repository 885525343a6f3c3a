//! Booking calendar: view ranges, navigation, and per-day appointment grids.

pub mod appointment;
pub mod error;
pub mod grid;
pub mod view;

pub use appointment::Appointment;
pub use error::CalendarError;
pub use grid::{CalendarDay, CalendarGrid, TechnicianFilter};
pub use view::{CalendarView, Direction};
