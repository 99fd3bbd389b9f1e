// src/lib.rs
//! Scrapes the prize-tier table off a savings-lottery operator's rules
//! page and computes the expected value of each tier.
//!
//! Fetch → reconstruct → aggregate, once per call, nothing cached.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod table;

pub use aggregate::{aggregate, CleanTable};
pub use config::ScrapeConfig;
pub use error::{Result, ScrapeError};
pub use fetch::{Fetch, HttpFetcher, RawDocument, StaticFetcher};
pub use table::RawTable;

use tracing::{info, instrument};

/// Fetch the rules page and rebuild its table without touching the cells.
#[instrument(level = "info", skip(fetcher, config), fields(url = %config.url))]
pub fn get_prize_table_raw<F: Fetch + ?Sized>(
    fetcher: &F,
    config: &ScrapeConfig,
) -> Result<RawTable> {
    let url = fetch::parse_url(&config.url)?;
    let header_sel = table::reconstruct::parse_selector(&config.header_selector)?;
    let cell_sel = table::reconstruct::parse_selector(&config.cell_selector)?;

    let doc = fetcher.fetch(&url)?;
    let raw = table::reconstruct(&doc.body, &header_sel, &cell_sel)?;
    info!(
        status = doc.status,
        fetched_at = %doc.fetched_at,
        columns = raw.column_count(),
        rows = raw.row_count(),
        "raw table scraped"
    );
    Ok(raw)
}

/// Full pipeline: raw table plus `winnings`, `probability` and
/// `expected_winnings`.
pub fn get_prize_table<F: Fetch + ?Sized>(
    fetcher: &F,
    config: &ScrapeConfig,
) -> Result<CleanTable> {
    let raw = get_prize_table_raw(fetcher, config)?;
    aggregate(raw, &config.prize_pattern, &config.odds_pattern)
}

/// [`get_prize_table`] over a real HTTP client built from `config`.
pub fn fetch_prize_table(config: &ScrapeConfig) -> Result<CleanTable> {
    let fetcher = HttpFetcher::new(config.timeout())?;
    get_prize_table(&fetcher, config)
}
