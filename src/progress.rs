// src/progress.rs
use std::path::Path;

use crate::deal::DealRecord;
use crate::error::ScanError;

/// Status reporting for a scan run. Frontends implement this to surface
/// progress to users; every method defaults to a no-op.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// About to request `page`.
    fn page_started(&mut self, _page: u32, _url: &str) {}

    /// `page` was read: `listings` containers found, `kept` of them cleared the threshold.
    fn page_done(&mut self, _page: u32, _listings: usize, _kept: usize) {}

    /// The request or the document for `page` failed; the scan stops here.
    fn page_failed(&mut self, _page: u32, _error: &ScanError) {}

    /// `page` had no listing containers; the scan stops here.
    fn no_more_results(&mut self, _page: u32) {}

    /// Deals were written to `path`.
    fn deals_written(&mut self, _path: &Path, _deals: &[DealRecord]) {}

    /// Nothing cleared the threshold; no file written.
    fn nothing_found(&mut self) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
