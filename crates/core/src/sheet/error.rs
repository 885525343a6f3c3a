//! Sheet export errors.

use thiserror::Error;

/// Errors that can occur while writing an exported sheet.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer rejected a record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the destination failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
