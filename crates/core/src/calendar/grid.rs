//! Appointments grouped onto the days of a calendar view.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::appointment::Appointment;
use super::error::CalendarError;
use super::view::CalendarView;
use crate::period::window::Dated;

/// Filter label that selects every technician.
pub const ALL_TECHNICIANS: &str = "All";

/// Which technician's appointments are shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TechnicianFilter {
    /// Every appointment.
    #[default]
    All,
    /// Appointments booked with exactly this technician.
    Named(String),
}

impl TechnicianFilter {
    /// Returns true if the appointment passes the filter.
    #[must_use]
    pub fn matches(&self, appointment: &Appointment) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => appointment.technician == *name,
        }
    }
}

impl From<&str> for TechnicianFilter {
    fn from(label: &str) -> Self {
        if label.trim().is_empty() || label.trim().eq_ignore_ascii_case(ALL_TECHNICIANS) {
            Self::All
        } else {
            Self::Named(label.trim().to_string())
        }
    }
}

/// One cell of the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    /// The day shown.
    pub date: NaiveDate,
    /// False for leading and trailing days of other months in month view.
    pub in_focus: bool,
    /// Appointments on this day, earliest first.
    pub appointments: Vec<Appointment>,
}

/// Days of a view with their appointments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    /// Header shown above the grid.
    pub title: String,
    /// Cells in display order.
    pub days: Vec<CalendarDay>,
}

impl CalendarGrid {
    /// Groups the appointments passing `filter` onto the days of `view`.
    ///
    /// Appointments without a readable start time never appear.
    pub fn build(
        view: CalendarView,
        anchor: NaiveDate,
        appointments: &[Appointment],
        filter: &TechnicianFilter,
    ) -> Result<Self, CalendarError> {
        let days = view
            .days(anchor)?
            .into_iter()
            .map(|date| {
                let mut on_day: Vec<Appointment> = appointments
                    .iter()
                    .filter(|a| a.business_date() == Some(date) && filter.matches(a))
                    .cloned()
                    .collect();
                on_day.sort_by_key(|a| a.starts_at);
                CalendarDay {
                    date,
                    in_focus: view != CalendarView::Month || date.month() == anchor.month(),
                    appointments: on_day,
                }
            })
            .collect();

        Ok(Self {
            title: view.title(anchor),
            days,
        })
    }

    /// The cell for `date`, if the grid shows it.
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days.iter().find(|d| d.date == date)
    }
}
