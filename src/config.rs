// src/config.rs
use crate::error::{Result, ScrapeError};
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};

/// The operator's public rules page carrying the prize table.
pub const DEFAULT_URL: &str = "https://www.withyotta.com/official-rules";

/// Narrow marker: only column-title nodes carry both classes.
pub const DEFAULT_HEADER_SELECTOR: &str = "div.table-block.table-header";

/// Broad marker: every table node, headers included.
pub const DEFAULT_CELL_SELECTOR: &str = "div.table-block";

pub const DEFAULT_PRIZE_PATTERN: &str = "prize";
pub const DEFAULT_ODDS_PATTERN: &str = "odds";

/// Knobs for one scrape. `Default` is the production behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub url: String,
    pub header_selector: String,
    pub cell_selector: String,
    /// Case-insensitive regex locating the prize column.
    pub prize_pattern: String,
    /// Case-insensitive regex locating the odds column.
    pub odds_pattern: String,
    /// `None` blocks until the server answers.
    pub timeout_secs: Option<u64>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            header_selector: DEFAULT_HEADER_SELECTOR.to_string(),
            cell_selector: DEFAULT_CELL_SELECTOR.to_string(),
            prize_pattern: DEFAULT_PRIZE_PATTERN.to_string(),
            odds_pattern: DEFAULT_ODDS_PATTERN.to_string(),
            timeout_secs: None,
        }
    }
}

impl ScrapeConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).map_err(|e| ScrapeError::Config(format!("invalid YAML: {e}")))
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| ScrapeError::Config(format!("reading {}: {e}", path.display())))?;
        Self::from_yaml_str(&text)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
