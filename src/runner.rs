// src/runner.rs
use std::path::PathBuf;

use tracing::{error, info};

use crate::{
    config::options::AppOptions,
    core::net::{HttpFetcher, PageSource},
    error::ScanError,
    file::write_deals,
    pages::selectors::CompiledSelectors,
    progress::Progress,
    scan::{self, Pacer, StopReason},
};

/// Summary of what a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub stop: StopReason,
    pub pages_read: u32,
    pub listings_seen: usize,
    pub deals_found: usize,
    /// `None` when nothing cleared the threshold.
    pub written: Option<PathBuf>,
}

/// Top-level entry: validate options, scan over HTTP, export.
pub fn run(
    opts: &AppOptions,
    progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, ScanError> {
    opts.validate()?;
    let selectors = opts.scan.selectors.compile()?;
    let mut fetcher = HttpFetcher::new(&opts.scan)?;
    let mut pacer = scan::pacer_for(&opts.scan.pacing);

    run_with(opts, &selectors, &mut fetcher, pacer.as_mut(), progress)
}

/// Same as `run`, with the page source and pacing supplied by the caller.
pub fn run_with(
    opts: &AppOptions,
    selectors: &CompiledSelectors,
    source: &mut dyn PageSource,
    pacer: &mut dyn Pacer,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, ScanError> {
    let report = scan::scan_pages(&opts.scan, selectors, source, pacer, progress.as_deref_mut());

    let deals_found = report.deals.len();
    let written = if report.deals.is_empty() {
        info!("no deals cleared the threshold; nothing written");
        if let Some(p) = progress.as_deref_mut() {
            p.nothing_found();
        }
        None
    } else {
        let path = opts.export.out_path();
        let path = match write_deals(&path, &report.deals) {
            Ok(path) => path,
            Err(e) => {
                error!(error = %e, "export failed; scan results were not saved");
                if let Some(p) = progress.as_deref_mut() {
                    p.finish();
                }
                return Err(e);
            }
        };
        if let Some(p) = progress.as_deref_mut() {
            p.deals_written(&path, &report.deals);
        }
        Some(path)
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary {
        stop: report.stop,
        pages_read: report.pages_read,
        listings_seen: report.listings_seen,
        deals_found,
        written,
    })
}
