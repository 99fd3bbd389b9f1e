// src/error.rs
use thiserror::Error;

/// Every way a scrape can fail. None of these are recovered locally:
/// the first error aborts the whole run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport-level failure while fetching the rules page.
    #[error("GET {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The markup did not yield a usable table (no headers, ragged columns).
    #[error("table structure: {0}")]
    Structural(String),

    /// A cell did not contain the numeric pattern its normalizer expects.
    #[error("cannot parse {kind} from {text:?}")]
    Parse { kind: &'static str, text: String },

    /// No column name matched the requested pattern.
    #[error("no column matches {pattern:?} (columns: {columns:?})")]
    Lookup {
        pattern: String,
        columns: Vec<String>,
    },

    /// Bad configuration: URL, selector, column pattern or YAML.
    #[error("config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

impl ScrapeError {
    pub(crate) fn parse(kind: &'static str, text: impl Into<String>) -> Self {
        ScrapeError::Parse {
            kind,
            text: text.into(),
        }
    }
}
