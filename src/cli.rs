// src/cli.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use crate::config::consts::*;
use crate::config::options::{AppOptions, ExportOptions, Pacing, ScanOptions};
use crate::deal::DealRecord;
use crate::error::ScanError;
use crate::pages::selectors::SelectorSet;
use crate::progress::Progress;
use crate::report;

/// Scan paginated search results for discounted listings and export them to CSV.
#[derive(Debug, Parser)]
#[command(name = "deal_scan", version)]
pub struct Cli {
    /// Site root prefixed to the search path and to relative product links
    #[arg(long, env = "DEAL_SCAN_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,

    /// Search path including its query, e.g. `/s?k=laptop`
    #[arg(long, env = "DEAL_SCAN_SEARCH_PATH", default_value = SEARCH_PATH)]
    pub search_path: String,

    /// Keep listings discounted by at least this many percent
    #[arg(long, env = "DEAL_SCAN_MIN_DISCOUNT", default_value_t = MIN_DISCOUNT_PERCENTAGE)]
    pub min_discount: f64,

    #[arg(long, env = "DEAL_SCAN_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    #[arg(long, env = "DEAL_SCAN_OUTPUT_FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Per-request timeout
    #[arg(long, value_name = "SECS", default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    #[arg(long, value_name = "SECS", default_value_t = DELAY_MIN_SECS)]
    pub min_delay: f64,

    #[arg(long, value_name = "SECS", default_value_t = DELAY_MAX_SECS)]
    pub max_delay: f64,

    /// Do not pause between pages
    #[arg(long)]
    pub no_delay: bool,

    /// Stop after this many pages
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pages: Option<u32>,

    /// TOML file overriding any of the listing selectors
    #[arg(long, value_name = "FILE", env = "DEAL_SCAN_SELECTORS")]
    pub selectors: Option<PathBuf>,
}

impl Cli {
    pub fn into_options(self) -> Result<AppOptions, ScanError> {
        let pacing = if self.no_delay {
            Pacing::Off
        } else {
            Pacing::from_secs(self.min_delay, self.max_delay)?
        };
        let selectors = match &self.selectors {
            Some(path) => SelectorSet::from_toml_file(path)?,
            None => SelectorSet::default(),
        };

        let opts = AppOptions {
            scan: ScanOptions {
                base_url: self.base_url,
                search_path: self.search_path,
                min_discount: self.min_discount,
                timeout: Duration::from_secs(self.timeout),
                pacing,
                max_pages: self.max_pages,
                selectors,
            },
            export: ExportOptions {
                data_dir: self.data_dir,
                file_name: self.output_file,
            },
        };
        opts.validate()?;
        Ok(opts)
    }
}

/// Prints the scan's status lines to the terminal.
#[derive(Default)]
pub struct ConsoleProgress;

impl ConsoleProgress {
    pub fn started(&mut self) {
        println!("Deal scan: starting search-result analysis…");
    }
}

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("Deal scan: {msg}");
    }

    fn page_started(&mut self, page: u32, url: &str) {
        println!("Deal scan: fetching page {page}: {url}");
    }

    fn page_failed(&mut self, page: u32, error: &ScanError) {
        eprintln!("Deal scan: request error on page {page}: {error}");
    }

    fn no_more_results(&mut self, page: u32) {
        println!("Deal scan: no products found on page {page}. End of search.");
    }

    fn deals_written(&mut self, path: &Path, deals: &[DealRecord]) {
        println!();
        println!("Deal scan: {} deals found and saved to {}", deals.len(), path.display());
        println!("Deal scan: first {} deals:", deals.len().min(PREVIEW_ROWS));
        print!("{}", report::preview(deals, PREVIEW_ROWS));
    }

    fn nothing_found(&mut self) {
        println!("Deal scan: no significant deals found this time.");
    }

    fn finish(&mut self) {
        println!("Deal scan: done.");
    }
}
