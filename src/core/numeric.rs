//! Numeric normalization helpers

use once_cell::sync::Lazy;
use regex::Regex;

/// First contiguous decimal numeral in a string: digits with an optional
/// fractional part. No sign, no exponent, no locale separators.
static NUMERAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap());

/// Extract the first numeral from free text such as `"250V"` or `"10 W"`.
pub fn extract_numeral(text: &str) -> Option<f64> {
    NUMERAL_PATTERN
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Round to a fixed number of decimal places.
///
/// Rounds the exact binary value, as decimal formatting does, so `0.305`
/// (stored just below the tie) becomes `0.3`. Scaling by a power of ten
/// first would round it up.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
