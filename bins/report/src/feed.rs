//! Report feed backed by a JSON snapshot file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use salon_core::earnings::EarningsReport;
use salon_core::live::{ReportFeed, Subscription};
use salon_core::period::PeriodWindow;
use salon_shared::AppError;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Errors reading a snapshot file.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// The file is not a JSON array of documents.
    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
}

impl FeedError {
    /// Returns true if the file does not exist.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Reads the documents stored in a JSON array file.
pub fn read_documents(path: &Path) -> Result<Vec<Value>, FeedError> {
    let text = fs::read_to_string(path).map_err(|source| FeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| FeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Earnings reports stored as a JSON array in one file.
///
/// Each read is a full snapshot; subscriptions only check the file is there.
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    /// Creates a feed over the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the current snapshot and keeps the reports dated within `window`.
    pub fn snapshot(&self, window: &PeriodWindow) -> Result<Vec<EarningsReport>, FeedError> {
        let documents = read_documents(&self.path)?;
        let total = documents.len();
        let reports = window.retain(EarningsReport::from_snapshot(&documents));
        debug!(path = %self.path.display(), total, kept = reports.len(), "Read report snapshot");
        Ok(reports)
    }
}

impl ReportFeed for FileFeed {
    type Error = FeedError;

    fn subscribe(&self, window: &PeriodWindow) -> Result<Subscription, FeedError> {
        fs::metadata(&self.path).map_err(|source| FeedError::Read {
            path: self.path.clone(),
            source,
        })?;
        let path = self.path.display().to_string();
        let start = window.start;
        Ok(Subscription::new(move || {
            debug!(path = %path, %start, "Closed report feed");
        }))
    }
}

impl From<FeedError> for AppError {
    fn from(err: FeedError) -> Self {
        if err.is_missing() {
            return Self::NotFound(err.to_string());
        }
        match err {
            FeedError::Read { .. } => Self::Io(err.to_string()),
            FeedError::Parse { .. } => Self::Parse(err.to_string()),
        }
    }
}
