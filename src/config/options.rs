// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use super::consts::*;
use crate::error::ScanError;
use crate::pages::selectors::SelectorSet;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppOptions {
    pub scan: ScanOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Reject settings the scan loop cannot run with.
    pub fn validate(&self) -> Result<(), ScanError> {
        self.scan.validate()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScanOptions {
    pub base_url: String,
    pub search_path: String,
    pub min_discount: f64,
    pub timeout: Duration,
    pub pacing: Pacing,
    /// Stop after this many pages even if more results exist. `None` = follow pagination to the end.
    pub max_pages: Option<u32>,
    pub selectors: SelectorSet,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            search_path: s!(SEARCH_PATH),
            min_discount: MIN_DISCOUNT_PERCENTAGE,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            pacing: Pacing::default(),
            max_pages: None,
            selectors: SelectorSet::default(),
        }
    }
}

impl ScanOptions {
    fn validate(&self) -> Result<(), ScanError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ScanError::Config(format!("base URL `{}`: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ScanError::Config(format!(
                "base URL `{}` must be http or https",
                self.base_url
            )));
        }
        if !self.min_discount.is_finite() {
            return Err(ScanError::Config(s!("minimum discount must be a finite number")));
        }
        if self.timeout.is_zero() {
            return Err(ScanError::Config(s!("request timeout must be greater than zero")));
        }
        if self.max_pages == Some(0) {
            return Err(ScanError::Config(s!("max pages must be at least 1")));
        }
        if let Pacing::Random { min, max } = self.pacing {
            if max < min {
                return Err(ScanError::Config(format!(
                    "delay range is inverted: min {}s > max {}s",
                    min.as_secs_f64(),
                    max.as_secs_f64()
                )));
            }
        }
        Ok(())
    }
}

/// Pause between page requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pacing {
    /// Uniformly random in `[min, max)`.
    Random { min: Duration, max: Duration },
    Off,
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::Random {
            min: Duration::from_secs_f64(DELAY_MIN_SECS),
            max: Duration::from_secs_f64(DELAY_MAX_SECS),
        }
    }
}

impl Pacing {
    /// Build from user-supplied seconds, rejecting negative or non-finite values.
    pub fn from_secs(min: f64, max: f64) -> Result<Self, ScanError> {
        let to_duration = |secs: f64| {
            Duration::try_from_secs_f64(secs)
                .map_err(|_| ScanError::Config(format!("invalid delay: {secs}s")))
        };
        Ok(Pacing::Random { min: to_duration(min)?, max: to_duration(max)? })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub data_dir: PathBuf,
    pub file_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            file_name: s!(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}
