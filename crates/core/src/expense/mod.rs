//! Salon expenses and their per-period summary.

pub mod service;
pub mod types;

pub use service::ExpenseService;
pub use types::{Expense, ExpenseSummary, UNASSIGNED};
