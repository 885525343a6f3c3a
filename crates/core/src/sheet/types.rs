//! Sheet data types and construction.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use salon_shared::types::ReportId;
use serde::Serialize;

use crate::earnings::{EarningsReport, EarningsService, PeriodTotals, RecordDerived};
use crate::staff::Roster;

/// Column headers that follow the technician columns.
pub const CHANNEL_HEADERS: [&str; 9] = [
    "Sell GC",
    "Return GC",
    "Check",
    "No. of Credit",
    "Total Credit",
    "Venmo",
    "Square",
    "Cash",
    "Total Earn",
];

/// Header of the first column.
pub const DATE_HEADER: &str = "Date";

/// A typed sheet cell; formatting is decided by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Cell {
    /// Free text (row labels).
    Text(String),
    /// Business date of a report.
    Date(Option<NaiveDate>),
    /// Monetary amount.
    Money(Decimal),
    /// Integer count.
    Count(i64),
    /// Nothing in this column.
    Empty,
}

/// One report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetRow {
    /// Report the row was built from.
    pub id: Option<ReportId>,
    /// Derived values of the report.
    pub derived: RecordDerived,
    /// Cells in header order.
    pub cells: Vec<Cell>,
}

/// Trailing summary rows, in the order they appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    /// Column totals.
    Total,
    /// Commission share of each technician total.
    Commission,
    /// Part of the commission paid by check.
    CheckPortion,
    /// Part of the commission paid in cash.
    CashPortion,
}

impl SummaryKind {
    /// All summary rows in display order.
    pub const ALL: [Self; 4] = [
        Self::Total,
        Self::Commission,
        Self::CheckPortion,
        Self::CashPortion,
    ];

    /// Row label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Total => "Total:",
            Self::Commission => "Commission 70%:",
            Self::CheckPortion => "70% of Check:",
            Self::CashPortion => "30% of Cash:",
        }
    }
}

/// A summary row below the report rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// Which summary this is.
    pub kind: SummaryKind,
    /// Cells in header order; the first holds the label.
    pub cells: Vec<Cell>,
}

/// Table of a period's reports with totals and commission rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EarningsSheet {
    /// Column headers.
    pub header: Vec<String>,
    /// One row per report, in input order.
    pub rows: Vec<SheetRow>,
    /// Period totals the summary rows were built from.
    pub totals: PeriodTotals,
    /// Summary rows in [`SummaryKind::ALL`] order.
    pub summary: Vec<SummaryRow>,
}

impl EarningsSheet {
    /// Builds the sheet for a roster and the reports of one period.
    #[must_use]
    pub fn build(service: &EarningsService, roster: &Roster, reports: &[EarningsReport]) -> Self {
        let names = roster.names();

        let mut header = Vec::with_capacity(names.len() + CHANNEL_HEADERS.len() + 1);
        header.push(DATE_HEADER.to_string());
        header.extend(names.iter().cloned());
        header.extend(CHANNEL_HEADERS.iter().map(|h| (*h).to_string()));

        let rows = reports
            .iter()
            .map(|report| {
                let derived = service.compute_record_derived(report);
                let mut cells = Vec::with_capacity(header.len());
                cells.push(Cell::Date(report.date));
                cells.extend(names.iter().map(|name| Cell::Money(report.amount_for(name))));
                cells.extend([
                    Cell::Money(report.sell_gift_card),
                    Cell::Money(report.return_gift_card),
                    Cell::Money(report.check),
                    Cell::Count(report.no_of_credit),
                    Cell::Money(report.total_credit),
                    Cell::Money(report.venmo),
                    Cell::Money(report.square),
                    Cell::Money(derived.cash),
                    Cell::Money(derived.total_earn),
                ]);
                SheetRow {
                    id: report.id.clone(),
                    derived,
                    cells,
                }
            })
            .collect();

        let totals = service.compute_totals(names, reports);
        let summary = SummaryKind::ALL
            .iter()
            .map(|&kind| Self::summary_row(service, &totals, kind))
            .collect();

        Self {
            header,
            rows,
            totals,
            summary,
        }
    }

    /// Returns true if the period has no reports.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The summary row of the given kind.
    #[must_use]
    pub fn summary_row_of(&self, kind: SummaryKind) -> Option<&SummaryRow> {
        self.summary.iter().find(|row| row.kind == kind)
    }

    fn summary_row(
        service: &EarningsService,
        totals: &PeriodTotals,
        kind: SummaryKind,
    ) -> SummaryRow {
        let mut cells = vec![Cell::Text(kind.label().to_string())];
        cells.extend(totals.technicians.iter().map(|t| {
            let split = service.compute_commission(t.total);
            Cell::Money(match kind {
                SummaryKind::Total => t.total,
                SummaryKind::Commission => split.commission,
                SummaryKind::CheckPortion => split.check_portion,
                SummaryKind::CashPortion => split.cash_portion,
            })
        }));

        if kind == SummaryKind::Total {
            cells.extend([
                Cell::Money(totals.sell_gift_card),
                Cell::Money(totals.return_gift_card),
                Cell::Money(totals.check),
                Cell::Count(totals.no_of_credit),
                Cell::Money(totals.total_credit),
                Cell::Money(totals.venmo),
                Cell::Money(totals.square),
                Cell::Money(totals.cash),
                Cell::Money(totals.total_earn),
            ]);
        } else {
            cells.extend(std::iter::repeat_n(Cell::Empty, CHANNEL_HEADERS.len()));
        }

        SummaryRow { kind, cells }
    }
}
