//! Period selectors and their calendar windows.
//!
//! Periods always fall in a single calendar year. There is no year picker:
//! [`PeriodWindow::current`] resolves against the system clock's year, and
//! [`PeriodWindow::resolve`] takes the year as an explicit parameter for
//! callers that already know it.

use chrono::{Datelike, Local, Month, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::PeriodError;
use crate::earnings::EarningsReport;

/// Selector index of the full-year option.
pub const FULL_YEAR_INDEX: u32 = 12;

/// Label of the full-year option.
pub const FULL_YEAR_LABEL: &str = "This Year";

/// What a report view is filtered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodSelector {
    /// One calendar month.
    Month(Month),
    /// January 1 through December 31.
    FullYear,
}

/// An entry of the period picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodOption {
    /// Picker index: 0-11 for months, 12 for the full year.
    pub index: u32,
    /// Label shown to the user.
    pub label: &'static str,
    /// The selector this option stands for.
    pub selector: PeriodSelector,
}

impl PeriodSelector {
    /// Maps a picker index to a selector.
    pub fn from_index(index: u32) -> Result<Self, PeriodError> {
        if index == FULL_YEAR_INDEX {
            return Ok(Self::FullYear);
        }
        u8::try_from(index)
            .ok()
            .filter(|&month0| u32::from(month0) < FULL_YEAR_INDEX)
            .and_then(|month0| Month::try_from(month0 + 1).ok())
            .map(Self::Month)
            .ok_or(PeriodError::InvalidSelector(index))
    }

    /// The month the system clock is in; the default selection.
    #[must_use]
    pub fn current_month() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// The month containing `date`.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        // `month0` is always 0-11
        Self::from_index(date.month0()).unwrap_or(Self::FullYear)
    }

    /// Picker index: 0-11 for months, 12 for the full year.
    #[must_use]
    pub fn index(self) -> u32 {
        match self {
            Self::Month(month) => month.number_from_month() - 1,
            Self::FullYear => FULL_YEAR_INDEX,
        }
    }

    /// Label shown in the period picker.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Month(month) => month.name(),
            Self::FullYear => FULL_YEAR_LABEL,
        }
    }

    /// All picker options in display order: January to December, then the full year.
    #[must_use]
    pub fn options() -> Vec<PeriodOption> {
        (0..=FULL_YEAR_INDEX)
            .filter_map(|index| Self::from_index(index).ok())
            .map(|selector| PeriodOption {
                index: selector.index(),
                label: selector.label(),
                selector,
            })
            .collect()
    }
}

impl std::fmt::Display for PeriodSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for PeriodSelector {
    type Err = PeriodError;

    /// Accepts a picker index, a month name (`march`, `mar`), or `year`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "year" | "this-year" | "this year" | "this_year" | "full-year" => {
                return Ok(Self::FullYear);
            }
            _ => {}
        }
        if let Ok(index) = normalized.parse::<u32>() {
            return Self::from_index(index);
        }
        normalized
            .parse::<Month>()
            .map(Self::Month)
            .map_err(|_| PeriodError::UnknownPeriod(s.to_string()))
    }
}

/// Records that carry a business date.
pub trait Dated {
    /// The record's business date, if readable.
    fn business_date(&self) -> Option<NaiveDate>;
}

impl Dated for EarningsReport {
    fn business_date(&self) -> Option<NaiveDate> {
        self.date
    }
}

/// Inclusive calendar bounds of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    /// Selector this window was resolved from.
    pub selector: PeriodSelector,
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period.
    pub end: NaiveDate,
}

impl PeriodWindow {
    /// Resolves a selector within the given year.
    pub fn resolve(selector: PeriodSelector, year: i32) -> Result<Self, PeriodError> {
        let (first_month, months) = match selector {
            PeriodSelector::Month(month) => (month.number_from_month(), 1),
            PeriodSelector::FullYear => (1, 12),
        };
        let start = NaiveDate::from_ymd_opt(year, first_month, 1)
            .ok_or(PeriodError::YearOutOfRange(year))?;
        let end = start
            .checked_add_months(Months::new(months))
            .and_then(|next| next.pred_opt())
            .ok_or(PeriodError::YearOutOfRange(year))?;

        Ok(Self {
            selector,
            start,
            end,
        })
    }

    /// Resolves a selector within the system clock's current year.
    pub fn current(selector: PeriodSelector) -> Result<Self, PeriodError> {
        Self::resolve(selector, Local::now().year())
    }

    /// Returns true if the date falls within the window, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Keeps the records dated within the window. Undated records are dropped.
    #[must_use]
    pub fn retain<T: Dated>(&self, records: Vec<T>) -> Vec<T> {
        records
            .into_iter()
            .filter(|record| record.business_date().is_some_and(|d| self.contains(d)))
            .collect()
    }
}
