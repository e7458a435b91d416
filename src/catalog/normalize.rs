//! Lenient field parsers for the hand-edited catalog file.

use regex::Regex;
use std::sync::LazyLock;

/// "1085", "1085m", "1,085 m", "1085.4 metres"
static HEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d[\d,]*)(?:\.\d+)?\s*(?:m|metres|meters|metre|meter)?\s*$")
        .expect("height pattern is valid")
});

/// Height in whole metres. Unit suffix and thousands separators are
/// stripped, decimals truncated. `None` when the value is not a height.
pub fn parse_height(raw: &str) -> Option<u32> {
    let caps = HEIGHT_RE.captures(raw)?;
    let digits: String = caps[1].chars().filter(|c| *c != ',').collect();
    digits.parse::<u32>().ok()
}

/// Latitude / longitude. Empty or non-finite values are `None`.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    let v = raw.trim().parse::<f64>().ok()?;
    v.is_finite().then_some(v)
}
