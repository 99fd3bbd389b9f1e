use crate::error::{Result, ScrapeError};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Header text as scraped; unique within a table.
    pub name: String,
    /// `None` where the source node had no single text child.
    pub cells: Vec<Option<String>>,
}

/// Scraped table: columns in order of first appearance in the markup,
/// every column the same length.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RawTable {
    columns: Vec<Column>,
}

impl RawTable {
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::new();
        if let Some(dup) = columns.iter().find(|c| !seen.insert(c.name.as_str())) {
            return Err(ScrapeError::Structural(format!(
                "duplicate column name {:?}",
                dup.name
            )));
        }
        if let Some(first) = columns.first() {
            let expected = first.cells.len();
            if let Some(bad) = columns.iter().find(|c| c.cells.len() != expected) {
                return Err(ScrapeError::Structural(format!(
                    "ragged columns: {:?} has {} cells, {:?} has {}",
                    first.name,
                    expected,
                    bad.name,
                    bad.cells.len()
                )));
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&[Option<String>]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.cells.as_slice())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    /// Row `i` across all columns, in column order.
    pub fn row(&self, i: usize) -> Option<Vec<Option<&str>>> {
        if i >= self.row_count() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| c.cells[i].as_deref())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str, cells: &[&str]) -> Column {
        Column {
            name: name.to_string(),
            cells: cells.iter().map(|s| Some(s.to_string())).collect(),
        }
    }

    #[test]
    fn rejects_ragged_columns() {
        let err = RawTable::new(vec![col("Prize", &["$1", "$2"]), col("Odds", &["1:9"])])
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Structural(_)));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = RawTable::new(vec![col("", &["$1"]), col("", &["1:9"])]).unwrap_err();
        assert!(matches!(err, ScrapeError::Structural(_)));
    }

    #[test]
    fn rows_follow_column_order() {
        let t = RawTable::new(vec![col("Prize", &["$1", "$2"]), col("Odds", &["1:9", "1:99"])])
            .unwrap();
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.column_count(), 2);
        assert_eq!(t.row(1), Some(vec![Some("$2"), Some("1:99")]));
        assert_eq!(t.row(2), None);
        assert_eq!(t.column_names().collect::<Vec<_>>(), ["Prize", "Odds"]);
    }
}
