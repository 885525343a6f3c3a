//! Screen and print rendering of the earnings sheet.

use salon_shared::types::{Currency, Money, format_count};

use super::types::{Cell, EarningsSheet};

/// Header of the screen-only actions column.
pub const ACTIONS_HEADER: &str = "Actions";

/// Controls offered on each report row on screen.
pub const ROW_ACTIONS: &str = "Edit | Delete";

/// Shown instead of report rows when the period has none.
pub const EMPTY_MESSAGE: &str = "No salon earnings found for this period.";

/// Where the sheet is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Interactive table with row actions.
    #[default]
    Screen,
    /// Printable table; action controls are suppressed.
    Print,
}

impl DisplayMode {
    const fn shows_actions(self) -> bool {
        matches!(self, Self::Screen)
    }
}

impl EarningsSheet {
    /// Renders every line of the table as formatted cell text.
    ///
    /// Monetary cells carry the currency symbol and two decimals; counts have
    /// none. An empty period renders a single message line between the
    /// header and the summary rows.
    #[must_use]
    pub fn render(&self, mode: DisplayMode, currency: Currency) -> Vec<Vec<String>> {
        let actions = mode.shows_actions();
        let mut lines = Vec::with_capacity(self.rows.len() + self.summary.len() + 1);

        let mut header = self.header.clone();
        if actions {
            header.push(ACTIONS_HEADER.to_string());
        }
        lines.push(header);

        if self.rows.is_empty() {
            lines.push(vec![EMPTY_MESSAGE.to_string()]);
        }
        for row in &self.rows {
            let mut line = format_cells(&row.cells, currency);
            if actions {
                line.push(ROW_ACTIONS.to_string());
            }
            lines.push(line);
        }

        for row in &self.summary {
            let mut line = format_cells(&row.cells, currency);
            if actions {
                line.push(String::new());
            }
            lines.push(line);
        }

        lines
    }

    /// Renders the table as aligned plain text.
    #[must_use]
    pub fn to_text(&self, mode: DisplayMode, currency: Currency) -> String {
        let lines = self.render(mode, currency);
        let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
        let mut widths = vec![0; columns];
        // the empty-period message spans the table, so it does not size column 0
        for line in lines.iter().filter(|line| line.len() > 1) {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for line in &lines {
            let text = line
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ");
            out.push_str(text.trim_end());
            out.push('\n');
        }
        out
    }
}

fn format_cells(cells: &[Cell], currency: Currency) -> Vec<String> {
    cells.iter().map(|cell| format_cell(cell, currency)).collect()
}

fn format_cell(cell: &Cell, currency: Currency) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
        Cell::Date(Some(date)) => date.format("%m/%d/%Y").to_string(),
        Cell::Date(None) | Cell::Empty => String::new(),
        Cell::Money(amount) => Money::new(*amount, currency).to_string(),
        Cell::Count(count) => format_count(*count),
    }
}
