// src/pages/selectors.rs
use std::fs;
use std::path::Path;

use scraper::Selector;
use serde::Deserialize;

use crate::error::ScanError;

/// CSS selectors for one site's search-results markup.
/// Every field can be overridden; unspecified fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorSet {
    /// One block per search result.
    pub listing: String,
    pub title: String,
    /// Integer part of the current price (may include the decimal point).
    pub price_whole: String,
    pub price_fraction: String,
    /// Struck-through list price container.
    pub former_price: String,
    /// Accessible-text span inside `former_price` holding the actual amount.
    pub former_price_text: String,
    /// Anchor carrying the relative product href.
    pub link: String,
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self {
            listing: s!(r#"div[data-component-type="s-search-result"]"#),
            title: s!("span.a-size-medium.a-color-base.a-text-normal"),
            price_whole: s!("span.a-price-whole"),
            price_fraction: s!("span.a-price-fraction"),
            former_price: s!("span.a-price.a-text-price"),
            former_price_text: s!("span.a-offscreen"),
            link: s!("a.a-link-normal.s-underline-text.s-link-style.a-text-normal"),
        }
    }
}

impl SelectorSet {
    pub fn from_toml_str(text: &str) -> Result<Self, ScanError> {
        toml::from_str(text).map_err(|e| ScanError::Config(format!("selector overrides: {e}")))
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ScanError> {
        let text = fs::read_to_string(path)
            .map_err(|e| ScanError::Config(format!("reading {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Parse every selector once, up front, so a typo fails before the first request.
    pub fn compile(&self) -> Result<CompiledSelectors, ScanError> {
        Ok(CompiledSelectors {
            listing: compile_one("listing", &self.listing)?,
            title: compile_one("title", &self.title)?,
            price_whole: compile_one("price_whole", &self.price_whole)?,
            price_fraction: compile_one("price_fraction", &self.price_fraction)?,
            former_price: compile_one("former_price", &self.former_price)?,
            former_price_text: compile_one("former_price_text", &self.former_price_text)?,
            link: compile_one("link", &self.link)?,
        })
    }
}

fn compile_one(name: &'static str, css: &str) -> Result<Selector, ScanError> {
    Selector::parse(css).map_err(|e| ScanError::Selector {
        name,
        css: css.to_string(),
        reason: e.to_string(),
    })
}

/// Parsed form of a `SelectorSet`, ready for `pages::search`.
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    pub listing: Selector,
    pub title: Selector,
    pub price_whole: Selector,
    pub price_fraction: Selector,
    pub former_price: Selector,
    pub former_price_text: Selector,
    pub link: Selector,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_compile() {
        assert!(SelectorSet::default().compile().is_ok());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let set = SelectorSet::from_toml_str(r#"title = "h2 span.title""#).unwrap();
        assert_eq!(set.title, "h2 span.title");
        assert_eq!(set.listing, SelectorSet::default().listing);
        assert!(set.compile().is_ok());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = SelectorSet::from_toml_str(r#"titel = "span""#).unwrap_err();
        assert!(matches!(err, ScanError::Config(_)));
    }

    #[test]
    fn bad_css_names_the_selector() {
        let set = SelectorSet { link: s!("a[[["), ..SelectorSet::default() };
        match set.compile() {
            Err(ScanError::Selector { name, css, .. }) => {
                assert_eq!(name, "link");
                assert_eq!(css, "a[[[");
            }
            other => panic!("expected selector error, got {other:?}"),
        }
    }
}
