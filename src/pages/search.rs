// src/pages/search.rs
//! Listing extraction for one search-results page.
//!
//! Each listing container is read independently. Sub-fields degrade to
//! placeholders instead of failing: title and link become `"N/A"`, prices become
//! `0.0`. Document order is preserved.

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::config::consts::NOT_AVAILABLE;
use crate::core::html::{first, first_attr, first_text, text_of};
use crate::core::sanitize::parse_price;
use super::selectors::CompiledSelectors;

/// One product block as found on the page, before any filtering.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub title: String,
    pub current_price: f64,
    pub former_price: f64,
    pub product_link: String,
}

/// Parse `markup` and extract every listing. An empty result means the page had
/// no listing containers at all.
pub fn parse_listings(markup: &str, sel: &CompiledSelectors, base_url: &str) -> Vec<Listing> {
    let doc = Html::parse_document(markup);
    extract_listings(&doc, sel, base_url)
}

pub fn extract_listings(doc: &Html, sel: &CompiledSelectors, base_url: &str) -> Vec<Listing> {
    let listings: Vec<Listing> = doc
        .select(&sel.listing)
        .map(|container| extract_one(container, sel, base_url))
        .collect();
    debug!(count = listings.len(), "listing containers extracted");
    listings
}

fn extract_one(container: ElementRef<'_>, sel: &CompiledSelectors, base_url: &str) -> Listing {
    // Present but blank stays blank; only an absent element is N/A.
    let title = first(container, &sel.title).map(text_of).unwrap_or_else(|| s!(NOT_AVAILABLE));

    let product_link = first_attr(container, &sel.link, "href")
        .map(|href| absolute_link(base_url, &href))
        .unwrap_or_else(|| s!(NOT_AVAILABLE));

    Listing {
        title,
        current_price: current_price(container, sel),
        former_price: former_price(container, sel),
        product_link,
    }
}

/// Whole + fraction fragments, e.g. `"1,299."` + `"99"`. Both must be present.
fn current_price(container: ElementRef<'_>, sel: &CompiledSelectors) -> f64 {
    let whole = first_text(container, &sel.price_whole);
    let fraction = first_text(container, &sel.price_fraction);
    match (whole, fraction) {
        (Some(w), Some(f)) => parse_price(&join!(&w, &f)).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Amount in the hidden accessible span of the struck-through price.
fn former_price(container: ElementRef<'_>, sel: &CompiledSelectors) -> f64 {
    first(container, &sel.former_price)
        .and_then(|strike| first_text(strike, &sel.former_price_text))
        .and_then(|text| parse_price(&text))
        .unwrap_or(0.0)
}

/// Relative hrefs are prefixed with the base URL; absolute ones are kept as is.
pub fn absolute_link(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return s!(href);
    }
    let base = base_url.trim_end_matches('/');
    if href.starts_with('/') {
        join!(base, href)
    } else {
        join!(base, "/", href)
    }
}
