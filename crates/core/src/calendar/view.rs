//! Calendar view ranges and navigation.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::CalendarError;

/// Number of cells in the month grid: six Sunday-start weeks.
pub const MONTH_GRID_CELLS: u64 = 42;

/// Range of days shown by the booking calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarView {
    /// The anchor day.
    #[serde(rename = "day")]
    Day,
    /// The anchor day and the two days after it.
    #[serde(rename = "3days")]
    ThreeDays,
    /// The Sunday-start week containing the anchor.
    #[serde(rename = "week")]
    Week,
    /// Six weeks covering the anchor's month.
    #[default]
    #[serde(rename = "month")]
    Month,
}

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Earlier dates.
    Back,
    /// Later dates.
    Forward,
}

impl CalendarView {
    /// Name used in the view picker.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::ThreeDays => "3days",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Days shown for `anchor`, in order.
    pub fn days(self, anchor: NaiveDate) -> Result<Vec<NaiveDate>, CalendarError> {
        let (start, count) = match self {
            Self::Day => (anchor, 1),
            Self::ThreeDays => (anchor, 3),
            Self::Week => (week_start(anchor)?, 7),
            Self::Month => (week_start(anchor.with_day(1).unwrap_or(anchor))?, MONTH_GRID_CELLS),
        };
        (0..count)
            .map(|offset| {
                start
                    .checked_add_days(Days::new(offset))
                    .ok_or(CalendarError::OutOfRange(start))
            })
            .collect()
    }

    /// Anchor after moving one view length in `direction`.
    ///
    /// Month steps keep the day of month, clamped to the target month's
    /// last day.
    pub fn step(self, anchor: NaiveDate, direction: Direction) -> Result<NaiveDate, CalendarError> {
        let moved = match (self, direction) {
            (Self::Month, Direction::Back) => anchor.checked_sub_months(Months::new(1)),
            (Self::Month, Direction::Forward) => anchor.checked_add_months(Months::new(1)),
            (_, Direction::Back) => anchor.checked_sub_days(Days::new(self.span_days())),
            (_, Direction::Forward) => anchor.checked_add_days(Days::new(self.span_days())),
        };
        moved.ok_or(CalendarError::OutOfRange(anchor))
    }

    /// Header shown above the calendar.
    #[must_use]
    pub fn title(self, anchor: NaiveDate) -> String {
        match self {
            Self::Day => anchor.format("%A, %B %-d").to_string(),
            Self::ThreeDays => "3 Day View".to_string(),
            Self::Week => anchor.format("Week of %B %-d").to_string(),
            Self::Month => anchor.format("%B %Y").to_string(),
        }
    }

    const fn span_days(self) -> u64 {
        match self {
            Self::Day => 1,
            Self::ThreeDays => 3,
            Self::Week | Self::Month => 7,
        }
    }
}

fn week_start(date: NaiveDate) -> Result<NaiveDate, CalendarError> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_sunday())))
        .ok_or(CalendarError::OutOfRange(date))
}

impl std::fmt::Display for CalendarView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CalendarView {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "3days" | "3-days" | "three-days" => Ok(Self::ThreeDays),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(CalendarError::UnknownView(s.to_string())),
        }
    }
}
