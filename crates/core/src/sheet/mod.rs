//! The earnings sheet shared by the on-screen table, the print view, and
//! the spreadsheet export.

pub mod error;
pub mod export;
pub mod render;
pub mod types;

pub use error::ExportError;
pub use render::DisplayMode;
pub use types::{Cell, EarningsSheet, SheetRow, SummaryKind, SummaryRow};
