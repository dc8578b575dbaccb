// tests/extract_listings.rs
//
// Listing extraction against a captured search page (offline).
//
use deal_scan::deal::{DealBook, DealFilter};
use deal_scan::pages::search::{parse_listings, Listing};
use deal_scan::pages::selectors::SelectorSet;

const BASE: &str = "https://www.amazon.ca";

fn fixture() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/search_page.html"))
        .expect("read tests/fixtures/search_page.html")
}

fn listings() -> Vec<Listing> {
    let sel = SelectorSet::default().compile().unwrap();
    parse_listings(&fixture(), &sel, BASE)
}

#[test]
fn finds_every_result_container_in_order() {
    let got = listings();
    assert_eq!(got.len(), 4, "sponsored block must not count");
    assert!(got[0].title.starts_with("Laptop A"));
    assert_eq!(got[1].title, "Laptop B 14\"");
    assert_eq!(got[2].title, "N/A");
    assert_eq!(got[3].title, "Laptop D Refurbished");
}

#[test]
fn title_is_trimmed_with_inner_whitespace_kept() {
    assert_eq!(
        listings()[0].title,
        "Laptop A 15.6\" FHD, 16GB RAM,\n            512GB SSD"
    );
}

#[test]
fn prices_are_parsed_from_fragments_and_offscreen_text() {
    let got = listings();
    assert_eq!((got[0].current_price, got[0].former_price), (799.0, 999.0));
    assert_eq!((got[1].current_price, got[1].former_price), (500.0, 550.0));
    assert_eq!((got[2].current_price, got[2].former_price), (1049.99, 1499.99));
}

#[test]
fn strike_without_accessible_span_gives_zero_former_price() {
    let d = &listings()[3];
    assert_eq!(d.current_price, 300.0);
    assert_eq!(d.former_price, 0.0);
}

#[test]
fn links_are_made_absolute() {
    let got = listings();
    assert_eq!(got[0].product_link, "https://www.amazon.ca/Laptop-A-15-6-FHD/dp/B0AAAA0001/ref=sr_1_1");
    assert_eq!(got[2].product_link, "https://www.amazon.ca/Gaming-Laptop-C/dp/B0CCCC0003/ref=sr_1_3");
    assert_eq!(got[3].product_link, "N/A");
}

#[test]
fn reparsing_is_identical() {
    assert_eq!(listings(), listings());
}

#[test]
fn threshold_keeps_a_and_c() {
    let filter = DealFilter::new(20.0);
    let mut book = DealBook::new();
    for l in listings() {
        book.offer(l, &filter);
    }
    let deals = book.into_deals();
    assert_eq!(deals.len(), 2);
    assert!(deals[0].title().starts_with("Laptop A"));
    assert_eq!(deals[0].discount_percent(), 20.02);
    assert_eq!(deals[1].title(), "N/A");
    assert_eq!(deals[1].discount_percent(), 30.0);
}

#[test]
fn overridden_selectors_read_other_markup() {
    let markup = r#"
        <ul>
          <li class="hit"><h3>Tablet</h3><b class="now">199.</b><i class="cents">99</i>
              <s class="was"><em>$249.99</em></s><a class="go" href="/p/9">view</a></li>
        </ul>"#;
    let set = SelectorSet::from_toml_str(
        r#"
        listing = "li.hit"
        title = "h3"
        price_whole = "b.now"
        price_fraction = "i.cents"
        former_price = "s.was"
        former_price_text = "em"
        link = "a.go"
        "#,
    )
    .unwrap();
    let got = parse_listings(markup, &set.compile().unwrap(), "https://shop.test");
    assert_eq!(
        got,
        vec![Listing {
            title: "Tablet".into(),
            current_price: 199.99,
            former_price: 249.99,
            product_link: "https://shop.test/p/9".into(),
        }]
    );
}
