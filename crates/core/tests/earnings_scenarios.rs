//! End-to-end earnings scenarios: raw store documents through period
//! selection, aggregation, the earnings sheet, and CSV export.

use chrono::{Month, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Value, json};

use salon_core::earnings::{EarningsPolicy, EarningsReport, EarningsService};
use salon_core::period::{PeriodSelector, PeriodWindow};
use salon_core::sheet::{DisplayMode, EarningsSheet, SummaryKind};
use salon_core::staff::{Roster, StaffMember};
use salon_shared::types::Currency;

fn staff() -> Vec<StaffMember> {
    serde_json::from_value(json!([
        {"id": "u1", "name": "Amy", "role": "technician"},
        {"id": "u2", "name": "", "email": "bao@salon.test", "role": "Technician"},
        {"id": "u3", "name": "Owner", "role": "admin"},
        {"id": "u4", "name": "Amy", "role": "technician"},
    ]))
    .unwrap()
}

fn documents() -> Vec<Value> {
    vec![
        json!({
            "id": "oct-14",
            "date": "2026-10-14",
            "technicianAmounts": {"Amy": 100, "bao@salon.test": 50},
            "sellGiftCard": 20,
            "noOfCredit": 3,
            "totalCredit": 6,
            "check": 10,
        }),
        json!({
            "id": "oct-15",
            "date": {"seconds": 1_792_022_400, "nanoseconds": 0},
            "technicianAmounts": {"Amy": "50", "bao@salon.test": ""},
        }),
        json!({
            "id": "nov-01",
            "date": "2026-11-01",
            "technicianAmounts": {"Amy": 999},
        }),
        json!({"id": "undated", "technicianAmounts": {"Amy": 1}}),
    ]
}

fn october() -> PeriodWindow {
    PeriodWindow::resolve(PeriodSelector::Month(Month::October), 2026).unwrap()
}

#[test]
fn roster_comes_from_technician_staff() {
    let roster = Roster::from_staff(&staff());
    assert_eq!(roster.names(), ["Amy", "bao@salon.test"]);
}

#[test]
fn october_totals_from_raw_documents() {
    let roster = Roster::from_staff(&staff());
    let reports = october().retain(EarningsReport::from_snapshot(&documents()));
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1].date, NaiveDate::from_ymd_opt(2026, 10, 15));

    let totals = EarningsService::default().compute_totals(roster.names(), &reports);
    assert_eq!(totals.technician("Amy"), Some(dec!(150)));
    assert_eq!(totals.technician("bao@salon.test"), Some(dec!(50)));
    assert_eq!(totals.total_earn, dec!(226));
    assert_eq!(totals.cash, dec!(210));
    assert_eq!(totals.report_count, 2);
}

#[test]
fn full_year_includes_november_but_not_undated() {
    let roster = Roster::from_staff(&staff());
    let window = PeriodWindow::resolve(PeriodSelector::FullYear, 2026).unwrap();
    let reports = window.retain(EarningsReport::from_snapshot(&documents()));

    let totals = EarningsService::default().compute_totals(roster.names(), &reports);
    assert_eq!(totals.report_count, 3);
    assert_eq!(totals.technician("Amy"), Some(dec!(1149)));
}

#[test]
fn sheet_summary_rows_use_commission_split() {
    let roster = Roster::from_staff(&staff());
    let reports = october().retain(EarningsReport::from_snapshot(&documents()));
    let sheet = EarningsSheet::build(&EarningsService::default(), &roster, &reports);

    let lines = sheet.render(DisplayMode::Print, Currency::Usd);
    let commission = &lines[1 + reports.len() + 1];
    assert_eq!(commission[..3], ["Commission 70%:", "$105.00", "$35.00"]);

    let cash = sheet.summary_row_of(SummaryKind::CashPortion).unwrap();
    assert_eq!(cash.cells.len(), sheet.header.len());
}

#[test]
fn custom_surcharge_flows_into_export() {
    let policy = EarningsPolicy {
        credit_surcharge: dec!(2.50),
        ..EarningsPolicy::default()
    };
    let roster = Roster::new(["Amy"]);
    let reports = october().retain(EarningsReport::from_snapshot(&documents()));
    let sheet = EarningsSheet::build(&EarningsService::new(policy), &roster, &reports);

    let csv = sheet.to_csv_string().unwrap();
    let first_row = csv.lines().nth(1).unwrap();
    // 150 technicians (Bao included) + 20 gift cards + 3 x 2.50
    assert!(first_row.ends_with(",161.50,177.50"), "{first_row}");
    assert_eq!(sheet.totals.total_earn, dec!(177.50) + dec!(50));
}

#[test]
fn empty_period_still_has_summary() {
    let roster = Roster::new(["Amy", "Bao"]);
    let window = PeriodWindow::resolve(PeriodSelector::Month(Month::March), 2026).unwrap();
    let reports = window.retain(EarningsReport::from_snapshot(&documents()));
    let sheet = EarningsSheet::build(&EarningsService::default(), &roster, &reports);

    assert!(sheet.is_empty());
    assert_eq!(sheet.totals.total_earn, Decimal::ZERO);
    let text = sheet.to_text(DisplayMode::Screen, Currency::Usd);
    assert!(text.contains("No salon earnings found for this period."));
    assert!(text.contains("Total:"));
}
