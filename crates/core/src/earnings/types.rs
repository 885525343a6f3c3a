//! Earnings data types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use salon_shared::config::EarningsConfig;
use salon_shared::types::ReportId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{
    coerce_amount, coerce_amount_map, coerce_count, coerce_date, coerce_optional_text,
};

/// One business day's earnings entry.
///
/// Deserializing never fails on field content: missing or non-numeric
/// values become zero and an unreadable date becomes `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEarningsReport", rename_all = "camelCase")]
pub struct EarningsReport {
    /// Store document key, when known.
    pub id: Option<ReportId>,
    /// Business day. Only the date component of the stored timestamp.
    pub date: Option<NaiveDate>,
    /// Amount earned per technician display name.
    ///
    /// Keys may name technicians no longer on the roster.
    pub technician_amounts: BTreeMap<String, Decimal>,
    /// Gift cards sold (adds to revenue).
    pub sell_gift_card: Decimal,
    /// Gift cards redeemed (deducted from cash only).
    pub return_gift_card: Decimal,
    /// Received by check.
    pub check: Decimal,
    /// Received by credit card.
    pub total_credit: Decimal,
    /// Received through Venmo.
    pub venmo: Decimal,
    /// Received through Square.
    pub square: Decimal,
    /// Number of credit card transactions.
    pub no_of_credit: i64,
}

/// Wire shape of a stored report, before coercion.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawEarningsReport {
    id: Value,
    date: Value,
    technician_amounts: Value,
    sell_gift_card: Value,
    return_gift_card: Value,
    check: Value,
    total_credit: Value,
    venmo: Value,
    square: Value,
    no_of_credit: Value,
}

impl From<RawEarningsReport> for EarningsReport {
    fn from(raw: RawEarningsReport) -> Self {
        Self {
            id: coerce_optional_text(&raw.id).map(ReportId::new),
            date: coerce_date(&raw.date),
            technician_amounts: coerce_amount_map(&raw.technician_amounts),
            sell_gift_card: coerce_amount(&raw.sell_gift_card),
            return_gift_card: coerce_amount(&raw.return_gift_card),
            check: coerce_amount(&raw.check),
            total_credit: coerce_amount(&raw.total_credit),
            venmo: coerce_amount(&raw.venmo),
            square: coerce_amount(&raw.square),
            no_of_credit: coerce_count(&raw.no_of_credit),
        }
    }
}

impl EarningsReport {
    /// Decodes a snapshot of report documents element by element.
    ///
    /// A malformed element becomes an all-zero report instead of failing
    /// the snapshot.
    #[must_use]
    pub fn from_snapshot(documents: &[Value]) -> Vec<Self> {
        documents
            .iter()
            .map(|doc| Self::deserialize(doc).unwrap_or_default())
            .collect()
    }

    /// Amount recorded for a technician, zero when absent.
    #[must_use]
    pub fn amount_for(&self, technician: &str) -> Decimal {
        self.technician_amounts
            .get(technician)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

/// Values derived from a single report. Computed, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDerived {
    /// Sum of all technician amounts, including technicians off the roster.
    pub total_technician_earn: Decimal,
    /// Technician earnings plus gift cards sold plus card surcharges.
    pub total_earn: Decimal,
    /// Residual cash after non-cash channels. May be negative.
    pub cash: Decimal,
}

/// Period total of one roster technician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicianTotal {
    /// Technician display name.
    pub name: String,
    /// Sum over the period.
    pub total: Decimal,
}

/// Totals over a set of reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// One entry per roster technician, in roster order.
    pub technicians: Vec<TechnicianTotal>,
    /// Gift cards sold.
    pub sell_gift_card: Decimal,
    /// Gift cards redeemed.
    pub return_gift_card: Decimal,
    /// Checks.
    pub check: Decimal,
    /// Credit card transaction count.
    pub no_of_credit: i64,
    /// Credit card receipts.
    pub total_credit: Decimal,
    /// Venmo receipts.
    pub venmo: Decimal,
    /// Square receipts.
    pub square: Decimal,
    /// Sum of per-record cash.
    pub cash: Decimal,
    /// Sum of per-record total earnings.
    pub total_earn: Decimal,
    /// Number of reports folded.
    pub report_count: usize,
}

impl PeriodTotals {
    /// Period total for a roster technician.
    #[must_use]
    pub fn technician(&self, name: &str) -> Option<Decimal> {
        self.technicians
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.total)
    }
}

/// Payroll split of a technician's period total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionSplit {
    /// Commission share of the period total ("Commission 70%").
    pub commission: Decimal,
    /// Part of the commission paid by check ("70% of Check").
    pub check_portion: Decimal,
    /// Remainder paid in cash ("30% of Cash").
    pub cash_portion: Decimal,
}

/// Rates applied by the earnings engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsPolicy {
    /// Added to revenue per credit card transaction.
    pub credit_surcharge: Decimal,
    /// Commission share of a technician's period total.
    pub commission_rate: Decimal,
    /// Share of the commission paid by check.
    pub check_share: Decimal,
}

impl EarningsPolicy {
    /// Flat card-processing fee passed to the client.
    pub const CREDIT_SURCHARGE: Decimal = Decimal::from_parts(200, 0, 0, false, 2);
    /// Technician commission rate.
    pub const COMMISSION_RATE: Decimal = Decimal::from_parts(70, 0, 0, false, 2);
    /// Check share of the commission.
    pub const CHECK_SHARE: Decimal = Decimal::from_parts(70, 0, 0, false, 2);
}

impl Default for EarningsPolicy {
    fn default() -> Self {
        Self {
            credit_surcharge: Self::CREDIT_SURCHARGE,
            commission_rate: Self::COMMISSION_RATE,
            check_share: Self::CHECK_SHARE,
        }
    }
}

impl From<&EarningsConfig> for EarningsPolicy {
    fn from(config: &EarningsConfig) -> Self {
        Self {
            credit_surcharge: config.credit_surcharge,
            commission_rate: config.commission_rate,
            check_share: config.check_share,
        }
    }
}
