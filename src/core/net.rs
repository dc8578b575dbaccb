// src/core/net.rs
// Blocking HTTP GET for search-result pages. One request per page, browser-like
// headers, fixed timeout. Failures are reported, never retried.

use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::debug;

use crate::config::consts::{ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION, USER_AGENT};
use crate::config::options::ScanOptions;
use crate::error::ScanError;

/// Anything that can hand the scan loop the markup of search page `n`.
pub trait PageSource {
    /// Human-readable location of page `n`, for status lines.
    fn url_for(&self, page: u32) -> String;

    fn fetch_page(&mut self, page: u32) -> Result<String, ScanError>;
}

/// `<base_url><search_path>&page=<n>` (`?` when the path has no query yet).
pub fn page_url(base_url: &str, search_path: &str, page: u32) -> String {
    let sep = if search_path.contains('?') { "&" } else { "?" };
    join!(base_url.trim_end_matches('/'), search_path, sep, "page=", &page.to_string())
}

fn browser_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    h.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    h.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE));
    h.insert(header::ACCEPT_ENCODING, HeaderValue::from_static(ACCEPT_ENCODING));
    h.insert(header::CONNECTION, HeaderValue::from_static(CONNECTION));
    h
}

pub struct HttpFetcher {
    client: Client,
    base_url: String,
    search_path: String,
}

impl HttpFetcher {
    pub fn new(opts: &ScanOptions) -> Result<Self, ScanError> {
        let client = Client::builder()
            .default_headers(browser_headers())
            .timeout(opts.timeout)
            // one connection per page request, closed afterwards
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ScanError::Config(format!("could not build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: opts.base_url.clone(),
            search_path: opts.search_path.clone(),
        })
    }
}

impl PageSource for HttpFetcher {
    fn url_for(&self, page: u32) -> String {
        page_url(&self.base_url, &self.search_path, page)
    }

    fn fetch_page(&mut self, page: u32) -> Result<String, ScanError> {
        let url = self.url_for(page);
        debug!(page, %url, "GET");

        let resp = self
            .client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ScanError::fetch(page, e))?;

        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        ensure_html(page, content_type.as_deref())?;

        let body = resp.text().map_err(|e| ScanError::fetch(page, e))?;
        debug!(page, bytes = body.len(), "page received");
        Ok(body)
    }
}

/// A response that declares a non-markup content type (JSON challenge, image, ...)
/// cannot be read as a results page. Missing content type is given the benefit of the doubt.
pub fn ensure_html(page: u32, content_type: Option<&str>) -> Result<(), ScanError> {
    let Some(ct) = content_type else { return Ok(()) };
    let ct = ct.to_ascii_lowercase();
    if ct.trim().is_empty() || ct.contains("html") || ct.contains("xml") {
        return Ok(());
    }
    Err(ScanError::PageStructure { page, reason: format!("unexpected content type `{ct}`") })
}
