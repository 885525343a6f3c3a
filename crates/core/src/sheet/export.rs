//! CSV export of the earnings sheet.

use std::io;

use salon_shared::types::{format_count, to_fixed};

use super::error::ExportError;
use super::types::{Cell, EarningsSheet};

impl EarningsSheet {
    /// Writes the sheet as CSV.
    ///
    /// Layout: the header, one record per report, a blank separator record,
    /// then the summary rows. Money is a plain two-decimal number without a
    /// currency symbol and dates are ISO `YYYY-MM-DD`.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut out = csv::Writer::from_writer(writer);

        out.write_record(&self.header)?;
        for row in &self.rows {
            out.write_record(row.cells.iter().map(csv_field))?;
        }
        out.write_record(std::iter::repeat_n("", self.header.len()))?;
        for row in &self.summary {
            out.write_record(row.cells.iter().map(csv_field))?;
        }

        out.flush()?;
        Ok(())
    }

    /// Renders the CSV export into a string.
    pub fn to_csv_string(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| ExportError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

fn csv_field(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
        Cell::Date(Some(date)) => date.format("%Y-%m-%d").to_string(),
        Cell::Date(None) | Cell::Empty => String::new(),
        Cell::Money(amount) => to_fixed(*amount).to_string(),
        Cell::Count(count) => format_count(*count),
    }
}
