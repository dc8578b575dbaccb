// src/core/sanitize.rs

/// Parse a displayed currency amount such as `$1,299.99` or `799.` + `00`.
/// Strips the currency symbol and thousands separators. Anything else
/// that does not read as a finite number yields `None`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|&c| c != '$' && c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() { return None; }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round to two fractional digits.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
