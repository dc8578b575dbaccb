// src/deal.rs
//! Discount arithmetic, the retained `DealRecord`, and the run-wide accumulator.

use chrono::Local;
use serde::Serialize;

use crate::config::consts::TIMESTAMP_FORMAT;
use crate::core::sanitize::round2;
use crate::pages::search::Listing;

/// Percentage off the former price. Zero unless both prices are strictly positive.
pub fn discount_percent(current_price: f64, former_price: f64) -> f64 {
    if former_price > 0.0 && current_price > 0.0 {
        (former_price - current_price) / former_price * 100.0
    } else {
        0.0
    }
}

/// Local wall-clock time in `YYYY-MM-DD HH:MM:SS`.
pub fn scan_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// CSV header, in column order. Matches the serde names on `DealRecord`.
pub const COLUMNS: [&str; 6] = [
    "Title",
    "Current Price",
    "Former Price",
    "Discount %",
    "Product Link",
    "Scan Date",
];

/// A listing that passed the discount threshold. Serialized field names are the
/// CSV header, in column order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DealRecord {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Current Price")]
    current_price: f64,
    #[serde(rename = "Former Price")]
    former_price: f64,
    #[serde(rename = "Discount %")]
    discount_percent: f64,
    #[serde(rename = "Product Link")]
    product_link: String,
    #[serde(rename = "Scan Date")]
    scan_timestamp: String,
}

impl DealRecord {
    pub fn new(listing: Listing, scan_timestamp: String) -> Self {
        let discount = discount_percent(listing.current_price, listing.former_price);
        Self::with_discount(listing, discount, scan_timestamp)
    }

    /// `discount` is the unrounded percentage for `listing`.
    fn with_discount(listing: Listing, discount: f64, scan_timestamp: String) -> Self {
        Self {
            title: listing.title,
            current_price: listing.current_price,
            former_price: listing.former_price,
            discount_percent: round2(discount),
            product_link: listing.product_link,
            scan_timestamp,
        }
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn current_price(&self) -> f64 { self.current_price }
    pub fn former_price(&self) -> f64 { self.former_price }
    /// Rounded to two fractional digits.
    pub fn discount_percent(&self) -> f64 { self.discount_percent }
    pub fn product_link(&self) -> &str { &self.product_link }
    pub fn scan_timestamp(&self) -> &str { &self.scan_timestamp }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DealFilter {
    min_discount: f64,
}

impl DealFilter {
    pub fn new(min_discount: f64) -> Self {
        Self { min_discount }
    }

    pub fn min_discount(&self) -> f64 { self.min_discount }

    /// Threshold is inclusive. Compared against the unrounded discount.
    pub fn accepts(&self, discount: f64) -> bool {
        discount >= self.min_discount
    }
}

/// Append-only, discovery-ordered collection of retained deals.
#[derive(Debug, Default)]
pub struct DealBook {
    deals: Vec<DealRecord>,
}

impl DealBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `listing` if it clears the filter. Returns whether it was kept.
    pub fn offer(&mut self, listing: Listing, filter: &DealFilter) -> bool {
        let discount = discount_percent(listing.current_price, listing.former_price);
        if !filter.accepts(discount) {
            return false;
        }
        self.deals.push(DealRecord::with_discount(listing, discount, scan_timestamp()));
        true
    }

    pub fn len(&self) -> usize { self.deals.len() }
    pub fn is_empty(&self) -> bool { self.deals.is_empty() }
    pub fn deals(&self) -> &[DealRecord] { &self.deals }

    pub fn into_deals(self) -> Vec<DealRecord> {
        self.deals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, current: f64, former: f64) -> Listing {
        Listing {
            title: s!(title),
            current_price: current,
            former_price: former,
            product_link: s!("https://www.amazon.ca/dp/X"),
        }
    }

    #[test]
    fn discount_needs_both_prices() {
        assert_eq!(discount_percent(0.0, 999.0), 0.0);
        assert_eq!(discount_percent(799.0, 0.0), 0.0);
        assert_eq!(discount_percent(0.0, 0.0), 0.0);
        assert_eq!(discount_percent(-5.0, 10.0), 0.0);
    }

    #[test]
    fn discount_formula() {
        assert_eq!(round2(discount_percent(799.0, 999.0)), 20.02);
        assert_eq!(round2(discount_percent(500.0, 550.0)), 9.09);
        assert_eq!(discount_percent(80.0, 100.0), 20.0);
    }

    #[test]
    fn price_increase_is_negative_discount() {
        assert!(discount_percent(120.0, 100.0) < 0.0);
    }

    #[test]
    fn threshold_is_inclusive() {
        let f = DealFilter::new(20.0);
        assert!(f.accepts(20.0));
        assert!(f.accepts(20.02));
        assert!(!f.accepts(19.99));
    }

    #[test]
    fn book_keeps_only_qualifying_listings() {
        let filter = DealFilter::new(20.0);
        let mut book = DealBook::new();
        assert!(book.offer(listing("A", 799.0, 999.0), &filter));
        assert!(!book.offer(listing("B", 500.0, 550.0), &filter));
        assert!(book.offer(listing("C", 80.0, 100.0), &filter));

        let deals = book.into_deals();
        assert_eq!(deals.len(), 2);
        assert_eq!(deals[0].title(), "A");
        assert_eq!(deals[0].discount_percent(), 20.02);
        assert_eq!(deals[1].title(), "C");
        assert_eq!(deals[1].discount_percent(), 20.0);
    }

    #[test]
    fn offered_record_matches_direct_construction() {
        let mut book = DealBook::new();
        book.offer(listing("A", 1049.99, 1499.99), &DealFilter::new(20.0));
        let kept = &book.deals()[0];
        let direct = DealRecord::new(listing("A", 1049.99, 1499.99), s!(kept.scan_timestamp()));
        assert_eq!(kept, &direct);
        assert_eq!(kept.discount_percent(), 30.0);
    }

    #[test]
    fn zero_threshold_keeps_unpriced_drops_markups() {
        // Missing prices give 0, which passes a 0 threshold.
        let mut book = DealBook::new();
        assert!(book.offer(listing("N", 0.0, 0.0), &DealFilter::new(0.0)));
        assert!(!book.offer(listing("U", 120.0, 100.0), &DealFilter::new(0.0)));
    }

    #[test]
    fn timestamp_shape() {
        let ts = scan_timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }
}
