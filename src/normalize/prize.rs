use crate::error::{Result, ScrapeError};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+\.?[0-9]*").expect("prize pattern should compile"));

/// Dollar amount in a prize cell, e.g. `"$1,000.00"` → `1000.0`.
///
/// The page sometimes writes `"$5..00"`; doubled dots collapse first.
pub fn clean_prize(text: &str) -> Result<f64> {
    let cleaned = text.replace("..", ".").replace(',', "");
    let m = NUMBER
        .find(&cleaned)
        .ok_or_else(|| ScrapeError::parse("prize", text))?;
    m.as_str()
        .parse::<f64>()
        .map_err(|_| ScrapeError::parse("prize", text))
}
