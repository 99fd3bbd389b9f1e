use super::raw_table::RawTable;
use crate::error::{Result, ScrapeError};
use regex::RegexBuilder;
use tracing::debug;

/// First column (in table order) whose name matches `pattern`, compared
/// case-insensitively as a regex. `Ok(None)` when nothing matches.
pub fn find_column<'t>(table: &'t RawTable, pattern: &str) -> Result<Option<&'t str>> {
    let re = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ScrapeError::Config(format!("column pattern {pattern:?}: {e}")))?;

    let found = table.column_names().find(|name| re.is_match(name));
    debug!(pattern, ?found, "column lookup");
    Ok(found)
}

/// Like [`find_column`], but a miss is a `Lookup` error.
pub fn require_column<'t>(table: &'t RawTable, pattern: &str) -> Result<&'t str> {
    find_column(table, pattern)?.ok_or_else(|| ScrapeError::Lookup {
        pattern: pattern.to_string(),
        columns: table.column_names().map(str::to_string).collect(),
    })
}
