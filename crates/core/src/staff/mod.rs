//! Staff records and the technician roster.

pub mod roster;

pub use roster::{Roster, StaffMember};
