// src/log.rs
// Diagnostic log. Console status lines go through `progress::Progress`; this file
// gets the `tracing` events (requests, per-page counts, failures).

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::consts::{LOG_ENV, LOG_FILE, STORE_DIR};

/// Install the global subscriber writing to `.store/deal_scan.log`.
/// Level comes from `DEAL_SCAN_LOG` (default `info`). Keep the returned guard
/// alive for the whole run or buffered lines are lost. Returns `None` when file
/// logging could not be set up; the scan still runs.
pub fn init() -> Option<WorkerGuard> {
    init_in(Path::new(STORE_DIR))
}

pub fn init_in(dir: &Path) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!("Warning: debug log disabled ({}: {e})", dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .ok()
        .map(|_| guard)
}
