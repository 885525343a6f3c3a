//! Expense summarization.

use rust_decimal::Decimal;

use super::types::{Expense, ExpenseSummary, UNASSIGNED};
use crate::period::PeriodWindow;

/// Stateless expense calculations.
pub struct ExpenseService;

impl ExpenseService {
    /// Summarizes the expenses dated within `window`. Undated expenses are skipped.
    #[must_use]
    pub fn summarize(expenses: &[Expense], window: &PeriodWindow) -> ExpenseSummary {
        let mut summary = ExpenseSummary::default();

        for expense in expenses
            .iter()
            .filter(|e| e.date.is_some_and(|d| window.contains(d)))
        {
            summary.count += 1;
            summary.total += expense.amount;
            *summary
                .by_supplier
                .entry(group_key(expense.supplier.as_deref()))
                .or_insert(Decimal::ZERO) += expense.amount;
            *summary
                .by_payment_account
                .entry(group_key(expense.payment_account.as_deref()))
                .or_insert(Decimal::ZERO) += expense.amount;
        }

        summary
    }
}

fn group_key(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(UNASSIGNED)
        .to_string()
}
