// src/aggregate.rs

use crate::{
    error::{Result, ScrapeError},
    normalize::{clean_odds, clean_prize},
    table::{require_column, RawTable},
};
use serde_json::{json, Map, Value};
use std::fmt;
use tracing::{debug, info, instrument};

pub const WINNINGS: &str = "winnings";
pub const PROBABILITY: &str = "probability";
pub const EXPECTED_WINNINGS: &str = "expected_winnings";

/// The scraped table plus three numeric columns, aligned row for row.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanTable {
    pub raw: RawTable,
    /// Name of the column `winnings` was parsed from.
    pub prize_column: String,
    /// Name of the column `probability` was parsed from.
    pub odds_column: String,
    pub winnings: Vec<f64>,
    pub probability: Vec<f64>,
    pub expected_winnings: Vec<f64>,
}

/// Apply `parse` to every cell of `column`, failing on the first bad one.
fn parse_column(
    raw: &RawTable,
    column: &str,
    kind: &'static str,
    parse: fn(&str) -> Result<f64>,
) -> Result<Vec<f64>> {
    raw.column(column)
        .unwrap_or_default()
        .iter()
        .map(|cell| match cell {
            Some(text) => parse(text),
            None => Err(ScrapeError::parse(kind, "")),
        })
        .collect()
}

/// Locate prize and odds columns, normalize them and derive expected value.
#[instrument(level = "debug", skip(raw), fields(rows = raw.row_count()))]
pub fn aggregate(raw: RawTable, prize_pattern: &str, odds_pattern: &str) -> Result<CleanTable> {
    let prize_column = require_column(&raw, prize_pattern)?.to_string();
    let odds_column = require_column(&raw, odds_pattern)?.to_string();
    debug!(%prize_column, %odds_column, "columns located");

    let winnings = parse_column(&raw, &prize_column, "prize", clean_prize)?;
    let probability = parse_column(&raw, &odds_column, "odds", clean_odds)?;
    let expected_winnings = winnings
        .iter()
        .zip(&probability)
        .map(|(w, p)| w * p)
        .collect();

    let table = CleanTable {
        raw,
        prize_column,
        odds_column,
        winnings,
        probability,
        expected_winnings,
    };
    info!(
        rows = table.row_count(),
        ev = table.total_expected_winnings(),
        "prize table cleaned"
    );
    Ok(table)
}

impl CleanTable {
    pub fn row_count(&self) -> usize {
        self.winnings.len()
    }

    /// Expected payout of one ticket summed over every tier.
    pub fn total_expected_winnings(&self) -> f64 {
        self.expected_winnings.iter().sum()
    }

    /// Scraped column names followed by the derived ones.
    pub fn column_names(&self) -> Vec<&str> {
        self.raw
            .column_names()
            .chain([WINNINGS, PROBABILITY, EXPECTED_WINNINGS])
            .collect()
    }

    /// One JSON object per row. A scraped column sharing a derived
    /// column's name is shadowed by the derived value.
    pub fn records(&self) -> Vec<Map<String, Value>> {
        (0..self.row_count())
            .map(|i| {
                let mut rec = Map::new();
                for col in self.raw.columns() {
                    rec.insert(col.name.clone(), json!(col.cells[i]));
                }
                rec.insert(WINNINGS.to_string(), json!(self.winnings[i]));
                rec.insert(PROBABILITY.to_string(), json!(self.probability[i]));
                rec.insert(
                    EXPECTED_WINNINGS.to_string(),
                    json!(self.expected_winnings[i]),
                );
                rec
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&json!({
            "columns": self.column_names(),
            "rows": self.records(),
            "total_expected_winnings": self.total_expected_winnings(),
        }))
    }
}

impl fmt::Display for CleanTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = self.column_names().into_iter().map(str::to_string).collect();
        let rows: Vec<Vec<String>> = (0..self.row_count())
            .map(|i| {
                let mut row: Vec<String> = self
                    .raw
                    .columns()
                    .iter()
                    .map(|c| c.cells[i].as_deref().unwrap_or("").trim().to_string())
                    .collect();
                row.push(format!("{:.2}", self.winnings[i]));
                row.push(format!("{:.3e}", self.probability[i]));
                row.push(format!("{:.6}", self.expected_winnings[i]));
                row
            })
            .collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|c| {
                rows.iter()
                    .map(|r| r[c].chars().count())
                    .chain([header[c].chars().count()])
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let line = |f: &mut fmt::Formatter<'_>, cells: &[String]| -> fmt::Result {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(s, &w)| format!("{s:<w$}"))
                .collect();
            writeln!(f, "{}", padded.join(" | ").trim_end())
        };

        line(f, &header)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;
        for row in &rows {
            line(f, row)?;
        }
        write!(f, "total expected winnings per ticket: {:.6}", self.total_expected_winnings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::reconstruct_from_cells;

    fn raw(headers: &[&str], cells: &[&str]) -> RawTable {
        let h: Vec<Option<String>> = headers.iter().map(|s| Some(s.to_string())).collect();
        let c = h
            .clone()
            .into_iter()
            .chain(cells.iter().map(|s| Some(s.to_string())));
        reconstruct_from_cells(h, c).unwrap()
    }

    #[test]
    fn derives_expected_value() {
        let t = aggregate(
            raw(&["Prize", "Odds"], &["$100.00", "1:9", "$50.00", "1:99"]),
            "prize",
            "odds",
        )
        .unwrap();
        assert_eq!(t.winnings, [100.0, 50.0]);
        assert!((t.probability[0] - 0.1).abs() < 1e-9);
        assert!((t.probability[1] - 0.01).abs() < 1e-9);
        assert!((t.expected_winnings[0] - 10.0).abs() < 1e-9);
        assert!((t.expected_winnings[1] - 0.5).abs() < 1e-9);
        assert!((t.total_expected_winnings() - 10.5).abs() < 1e-9);
    }

    #[test]
    fn expected_is_product_for_every_row() {
        let t = aggregate(
            raw(
                &["Prize Amount", "Odds of Winning", "Conditions"],
                &[
                    "$1,000,000.00", "1:25,000,000", "Match all",
                    "$5..00", "1:1,000", "Match two",
                    "$0.10", "1:3", "Any",
                ],
            ),
            "prize",
            "odds",
        )
        .unwrap();
        assert_eq!(t.row_count(), 3);
        for i in 0..t.row_count() {
            assert!((t.expected_winnings[i] - t.winnings[i] * t.probability[i]).abs() < 1e-9);
        }
        assert_eq!(
            t.column_names(),
            [
                "Prize Amount",
                "Odds of Winning",
                "Conditions",
                "winnings",
                "probability",
                "expected_winnings"
            ]
        );
    }

    #[test]
    fn bad_cell_aborts_whole_table() {
        let err = aggregate(
            raw(&["Prize", "Odds"], &["$1", "1:9", "Free ticket", "1:99"]),
            "prize",
            "odds",
        )
        .unwrap_err();
        assert!(matches!(err, ScrapeError::Parse { kind: "prize", .. }));
    }

    #[test]
    fn null_cell_is_parse_error() {
        let h = vec![Some("Prize".to_string()), Some("Odds".to_string())];
        let cells = h.clone().into_iter().chain([Some("$1".to_string()), None]);
        let t = reconstruct_from_cells(h, cells).unwrap();
        let err = aggregate(t, "prize", "odds").unwrap_err();
        assert!(matches!(err, ScrapeError::Parse { kind: "odds", .. }));
    }

    #[test]
    fn missing_column_is_lookup_error() {
        let err = aggregate(raw(&["Prize", "Chance"], &["$1", "1:9"]), "prize", "odds")
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Lookup { .. }));
    }

    #[test]
    fn record_keys_keep_column_order() {
        let t = aggregate(
            raw(&["Zeta Prize", "Alpha Odds"], &["$100.00", "1:9"]),
            "prize",
            "odds",
        )
        .unwrap();
        let records = t.records();
        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["Zeta Prize", "Alpha Odds", "winnings", "probability", "expected_winnings"]
        );
    }

    #[test]
    fn records_and_display() {
        let t = aggregate(raw(&["Prize", "Odds"], &["$100.00", "1:9"]), "prize", "odds")
            .unwrap();
        let recs = t.records();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0]["Prize"], json!("$100.00"));
        assert_eq!(recs[0]["winnings"], json!(100.0));

        let json: Value = serde_json::from_str(&t.to_json().unwrap()).unwrap();
        assert_eq!(json["columns"][4], json!("expected_winnings"));

        let text = t.to_string();
        assert!(text.starts_with("Prize"));
        assert!(text.contains("$100.00"));
        assert!(text.ends_with("total expected winnings per ticket: 10.000000"));
    }
}
