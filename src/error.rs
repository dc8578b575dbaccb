// src/error.rs
//! Error type shared by the fetcher, the extractor, and the exporter.

use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

type BoxedCause = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum ScanError {
    /// Transport failure or non-success status. Ends the scan; never retried.
    #[error("request for page {page} failed: {source}")]
    Fetch {
        page: u32,
        #[source]
        source: BoxedCause,
    },

    /// The response could not be navigated as a search-results document.
    /// Treated exactly like a fetch failure by the scan loop.
    #[error("page {page} is not a readable search-results document: {reason}")]
    PageStructure { page: u32, reason: String },

    #[error("invalid selector `{name}` (`{css}`): {reason}")]
    Selector {
        name: &'static str,
        css: String,
        reason: String,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ScanError {
    pub fn fetch(page: u32, cause: impl Into<BoxedCause>) -> Self {
        ScanError::Fetch { page, source: cause.into() }
    }

    pub fn write(path: impl Into<PathBuf>, cause: impl Into<csv::Error>) -> Self {
        ScanError::Write { path: path.into(), source: cause.into() }
    }

    /// Page number for errors that stop the scan loop.
    pub fn page(&self) -> Option<u32> {
        match self {
            ScanError::Fetch { page, .. } | ScanError::PageStructure { page, .. } => Some(*page),
            _ => None,
        }
    }
}
