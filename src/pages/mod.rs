// src/pages/mod.rs
//! # Page readers
//!
//! Everything that knows what a search-results page looks like lives here.
//!
//! - `selectors`: the named CSS selectors for one target site's markup. Defaults
//!   are compiled in; any subset can be overridden from a TOML file when the site
//!   changes its markup.
//! - `search`: pure extraction of listings from one page's document.
//!
//! Nothing in here touches the network or the filesystem (except loading a
//! selector override file). Fetching, filtering and export live in
//! `core::net`, `deal`, and `file`.
//!
//! Extraction is tolerant: a listing missing its title, price, or link still
//! produces a `Listing` with placeholders (`"N/A"` / `0.0`). The only page-level
//! signal is "no listing containers found", which the scan loop reads as the end
//! of pagination.
pub mod search;
pub mod selectors;
