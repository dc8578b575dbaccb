// src/report.rs
// Console preview of the exported deals: a psql-style table of the first rows.

use tabled::settings::object::Columns;
use tabled::settings::{Modify, Style, Width};
use tabled::{Table, Tabled};

use crate::deal::DealRecord;

/// Title and link cells longer than this are cut and suffixed with an ellipsis.
const MAX_CELL: usize = 48;

#[derive(Debug, Tabled)]
struct PreviewRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Current Price")]
    current_price: String,
    #[tabled(rename = "Former Price")]
    former_price: String,
    #[tabled(rename = "Discount %")]
    discount_percent: String,
    #[tabled(rename = "Product Link")]
    product_link: String,
    #[tabled(rename = "Scan Date")]
    scan_timestamp: String,
}

impl PreviewRow {
    fn new(index: usize, deal: &DealRecord) -> Self {
        Self {
            index,
            title: s!(deal.title()),
            current_price: format!("{:.2}", deal.current_price()),
            former_price: format!("{:.2}", deal.former_price()),
            discount_percent: format!("{:.2}", deal.discount_percent()),
            product_link: s!(deal.product_link()),
            scan_timestamp: s!(deal.scan_timestamp()),
        }
    }
}

/// Render up to `limit` deals as a table under the CSV column names.
pub fn preview(deals: &[DealRecord], limit: usize) -> String {
    let rows = deals.iter().take(limit).enumerate().map(|(i, d)| PreviewRow::new(i, d));
    let clip = || Width::truncate(MAX_CELL).suffix("…");

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(1)).with(clip()))
        .with(Modify::new(Columns::single(5)).with(clip()));
    let mut out = table.to_string();
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::search::Listing;

    fn deal(title: &str) -> DealRecord {
        DealRecord::new(
            Listing {
                title: s!(title),
                current_price: 799.0,
                former_price: 999.0,
                product_link: s!("https://www.amazon.ca/dp/A"),
            },
            s!("2024-05-01 12:00:00"),
        )
    }

    #[test]
    fn preview_caps_rows() {
        let deals: Vec<_> = (0..8).map(|i| deal(&format!("Laptop {i}"))).collect();
        let text = preview(&deals, 5);
        assert!(text.lines().next().unwrap().contains("Discount %"));
        assert_eq!(text.lines().filter(|l| l.contains("Laptop ")).count(), 5);
        assert!(text.contains("Laptop 4"));
        assert!(!text.contains("Laptop 5"));
    }

    #[test]
    fn preview_formats_prices() {
        let text = preview(&[deal("A")], 5);
        assert!(text.contains("799.00"));
        assert!(text.contains("999.00"));
        assert!(text.contains("20.02"));
    }

    #[test]
    fn long_titles_are_clipped() {
        let long = "x".repeat(100);
        let text = preview(&[deal(&long)], 5);
        assert!(!text.contains(&long));
        assert!(text.contains('…'));
    }
}
