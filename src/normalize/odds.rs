use crate::error::{Result, ScrapeError};
use once_cell::sync::Lazy;
use regex::Regex;

static AGAINST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([0-9]+)").expect("odds pattern should compile"));

/// Win probability from a `1:k` odds cell, read as one win in `k + 1`
/// draws: `1 / (1 + k)`. `k` is the digit run after the first colon that
/// has one; this is not a general odds parser.
pub fn clean_odds(text: &str) -> Result<f64> {
    let cleaned = text.replace(',', "");
    let k = AGAINST
        .captures(&cleaned)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| ScrapeError::parse("odds", text))?
        .as_str()
        .parse::<f64>()
        .map_err(|_| ScrapeError::parse("odds", text))?;
    Ok(1.0 / (1.0 + k))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn thousands_separators() {
        assert!((clean_odds("1:1,000").unwrap() - 1.0 / 1001.0).abs() < EPS);
        assert!((clean_odds("1:1,000,000").unwrap() - 1.0 / 1_000_001.0).abs() < EPS);
    }

    #[test]
    fn zero_against_is_certain() {
        assert_eq!(clean_odds("1:0").unwrap(), 1.0);
    }

    #[test]
    fn colon_inside_prose() {
        assert!((clean_odds("Odds 1:9 per ticket").unwrap() - 0.1).abs() < EPS);
    }

    #[test]
    fn missing_colon_is_parse_error() {
        for text in ["1 in 1000", "1:", "n/a"] {
            let err = clean_odds(text).unwrap_err();
            assert!(matches!(err, ScrapeError::Parse { kind: "odds", .. }), "{text}");
        }
    }
}
