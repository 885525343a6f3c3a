//! Expense types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use salon_shared::types::ExpenseId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{coerce_amount, coerce_date, coerce_optional_text, coerce_text};
use crate::period::window::Dated;

/// Group key for expenses without a supplier or payment account.
pub const UNASSIGNED: &str = "Unassigned";

/// One recorded salon expense.
///
/// Decoding never fails: an unreadable amount is zero and an unreadable
/// date leaves the expense undated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawExpense", rename_all = "camelCase")]
pub struct Expense {
    /// Store document key.
    pub id: Option<ExpenseId>,
    /// What was bought.
    pub name: String,
    /// Amount paid.
    pub amount: Decimal,
    /// Date of the expense.
    pub date: Option<NaiveDate>,
    /// Who was paid.
    pub supplier: Option<String>,
    /// Account the expense was paid from.
    pub payment_account: Option<String>,
    /// Link to the uploaded invoice.
    pub invoice_url: Option<String>,
    /// Storage path of the uploaded invoice.
    pub invoice_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawExpense {
    id: Value,
    name: Value,
    amount: Value,
    date: Value,
    supplier: Value,
    payment_account: Value,
    #[serde(rename = "invoiceURL", alias = "invoiceUrl")]
    invoice_url: Value,
    invoice_path: Value,
}

impl From<RawExpense> for Expense {
    fn from(raw: RawExpense) -> Self {
        Self {
            id: coerce_optional_text(&raw.id).map(ExpenseId::new),
            name: coerce_text(&raw.name),
            amount: coerce_amount(&raw.amount),
            date: coerce_date(&raw.date),
            supplier: coerce_optional_text(&raw.supplier),
            payment_account: coerce_optional_text(&raw.payment_account),
            invoice_url: coerce_optional_text(&raw.invoice_url),
            invoice_path: coerce_optional_text(&raw.invoice_path),
        }
    }
}

impl Expense {
    /// Decodes a snapshot of raw documents; unreadable documents become empty expenses.
    #[must_use]
    pub fn from_snapshot(documents: &[Value]) -> Vec<Self> {
        documents
            .iter()
            .map(|doc| Self::deserialize(doc).unwrap_or_default())
            .collect()
    }
}

impl Dated for Expense {
    fn business_date(&self) -> Option<NaiveDate> {
        self.date
    }
}

/// Expenses of one period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpenseSummary {
    /// Number of expenses in the period.
    pub count: usize,
    /// Sum of all amounts.
    pub total: Decimal,
    /// Totals per supplier.
    pub by_supplier: BTreeMap<String, Decimal>,
    /// Totals per payment account.
    pub by_payment_account: BTreeMap<String, Decimal>,
}
