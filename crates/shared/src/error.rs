//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Snapshot file missing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Snapshot file is not valid JSON.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid command-line or configuration value.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Export could not be written.
    #[error("Export error: {0}")]
    Export(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error (sysexits.h values).
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 64,
            Self::Parse(_) => 65,
            Self::NotFound(_) => 66,
            Self::Internal(_) => 70,
            Self::Export(_) => 73,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
        }
    }

    /// Returns the error code used in structured log output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Parse(_) => "PARSE_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Export(_) => "EXPORT_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
