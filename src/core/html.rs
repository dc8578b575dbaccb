// src/core/html.rs
// Small helpers over `scraper` element handles. Missing nodes come back as `None`,
// never as errors: callers decide which placeholder to substitute.

use scraper::{ElementRef, Selector};

/// All descendant text of `el`, trimmed at both ends. Inner whitespace is kept.
pub fn text_of(el: ElementRef<'_>) -> String {
    s!(el.text().collect::<String>().trim())
}

/// First element under `scope` matching `sel`.
pub fn first<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

/// Text of the first match, if any. Blank text counts as missing.
pub fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    first(scope, sel).map(text_of).filter(|t| !t.is_empty())
}

/// Attribute value of the first match, trimmed. Blank values count as missing.
pub fn first_attr(scope: ElementRef<'_>, sel: &Selector, attr: &str) -> Option<String> {
    first(scope, sel)
        .and_then(|el| el.value().attr(attr))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
