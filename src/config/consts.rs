// src/config/consts.rs

// Target
pub const BASE_URL: &str = "https://www.amazon.ca";
pub const SEARCH_PATH: &str = "/s?k=laptop";

// Filter
pub const MIN_DISCOUNT_PERCENTAGE: f64 = 20.0;

// Net
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9,fr;q=0.8";
pub const ACCEPT_ENCODING: &str = "gzip, deflate, br";
pub const CONNECTION: &str = "keep-alive";

// Politeness delay between pages, [min, max) seconds
pub const DELAY_MIN_SECS: f64 = 5.0;
pub const DELAY_MAX_SECS: f64 = 10.0;

// Export
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_OUTPUT_FILE: &str = "amazon_deals.csv";
pub const PREVIEW_ROWS: usize = 5;
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Placeholder for fields missing from a listing
pub const NOT_AVAILABLE: &str = "N/A";

// Local store (debug log)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "deal_scan.log";
pub const LOG_ENV: &str = "DEAL_SCAN_LOG";
