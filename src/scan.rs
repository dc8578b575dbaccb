// src/scan.rs
//! The page loop: fetch → extract → filter → pause → next page.
//!
//! Terminates on the first page with no listing containers, on the first fetch
//! or page-structure error, or when the optional page limit is reached. Whatever
//! was accumulated before the stop is handed back for export.

use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::options::{Pacing, ScanOptions};
use crate::core::net::PageSource;
use crate::deal::{DealBook, DealFilter, DealRecord};
use crate::error::ScanError;
use crate::pages::search;
use crate::pages::selectors::CompiledSelectors;
use crate::progress::Progress;

/// Politeness pause between page requests.
pub trait Pacer {
    fn pause(&mut self, after_page: u32);
}

/// Blocking sleep, uniformly random in `[min, max)`.
pub struct RandomPacer {
    min: Duration,
    max: Duration,
}

impl RandomPacer {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    fn next_delay(&self) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        let secs = rand::thread_rng().gen_range(self.min.as_secs_f64()..self.max.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}

impl Pacer for RandomPacer {
    fn pause(&mut self, after_page: u32) {
        let delay = self.next_delay();
        debug!(after_page, delay_ms = delay.as_millis() as u64, "pausing");
        thread::sleep(delay);
    }
}

pub struct NoPause;
impl Pacer for NoPause {
    fn pause(&mut self, _after_page: u32) {}
}

pub fn pacer_for(pacing: &Pacing) -> Box<dyn Pacer> {
    match *pacing {
        Pacing::Random { min, max } => Box::new(RandomPacer::new(min, max)),
        Pacing::Off => Box::new(NoPause),
    }
}

/// Why the loop stopped.
#[derive(Debug)]
pub enum StopReason {
    /// `page` had zero listing containers (end of results, or selectors no longer match).
    EmptyPage { page: u32 },
    /// Fetching or reading `page` failed. Not retried.
    FetchFailed { page: u32, error: ScanError },
    /// The configured page limit was reached after `page`.
    PageLimit { page: u32 },
}

#[derive(Debug)]
pub struct ScanReport {
    pub deals: Vec<DealRecord>,
    /// Pages fetched and read successfully.
    pub pages_read: u32,
    pub listings_seen: usize,
    pub stop: StopReason,
}

pub fn scan_pages(
    opts: &ScanOptions,
    selectors: &CompiledSelectors,
    source: &mut dyn PageSource,
    pacer: &mut dyn Pacer,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> ScanReport {
    let filter = DealFilter::new(opts.min_discount);
    let mut book = DealBook::new();
    let mut listings_seen = 0usize;
    let mut pages_read = 0u32;
    let mut page = 1u32;

    let stop = loop {
        let url = source.url_for(page);
        info!(page, %url, "fetching page");
        if let Some(p) = progress.as_deref_mut() {
            p.page_started(page, &url);
        }

        let markup = match source.fetch_page(page) {
            Ok(m) => m,
            Err(error) => {
                warn!(page, %error, "stopping scan");
                if let Some(p) = progress.as_deref_mut() {
                    p.page_failed(page, &error);
                }
                break StopReason::FetchFailed { page, error };
            }
        };
        pages_read += 1;

        let listings = search::parse_listings(&markup, selectors, &opts.base_url);
        if listings.is_empty() {
            info!(page, "no listing containers; end of results");
            if let Some(p) = progress.as_deref_mut() {
                p.no_more_results(page);
            }
            break StopReason::EmptyPage { page };
        }

        let found = listings.len();
        listings_seen += found;
        let before = book.len();
        for listing in listings {
            book.offer(listing, &filter);
        }
        let kept = book.len() - before;
        info!(page, found, kept, total = book.len(), "page processed");
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page, found, kept);
        }

        if opts.max_pages.is_some_and(|max| page >= max) {
            info!(page, "page limit reached");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("page limit reached after page {page}; stopping."));
            }
            break StopReason::PageLimit { page };
        }

        pacer.pause(page);
        page += 1;
    };

    ScanReport { deals: book.into_deals(), pages_read, listings_seen, stop }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_delay_stays_in_range() {
        let pacer = RandomPacer::new(Duration::from_millis(5), Duration::from_millis(10));
        for _ in 0..200 {
            let d = pacer.next_delay();
            assert!(d >= Duration::from_millis(5) && d <= Duration::from_millis(10), "{d:?}");
        }
    }

    #[test]
    fn collapsed_range_uses_min() {
        let pacer = RandomPacer::new(Duration::from_millis(7), Duration::from_millis(7));
        assert_eq!(pacer.next_delay(), Duration::from_millis(7));
    }
}
