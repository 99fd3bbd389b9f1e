// src/fetch.rs

use crate::error::{Result, ScrapeError};
use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Markup as it came off the wire. Lives for a single pipeline run.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub url: Url,
    /// Recorded, never validated.
    pub status: u16,
    pub body: String,
    pub fetched_at: DateTime<Utc>,
}

impl RawDocument {
    pub fn new(url: Url, status: u16, body: impl Into<String>) -> Self {
        Self {
            url,
            status,
            body: body.into(),
            fetched_at: Utc::now(),
        }
    }
}

/// Anything that can turn a URL into markup.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<RawDocument>;
}

/// One blocking GET per call. No retries, no status checks.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        // None disables reqwest's blocking default of 30s
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScrapeError::Config(format!("building HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    #[instrument(level = "info", skip(self, url), fields(url = %url))]
    fn fetch(&self, url: &Url) -> Result<RawDocument> {
        info!("fetching rules page");
        let network = |source: reqwest::Error| ScrapeError::Network {
            url: url.to_string(),
            source,
        };

        let resp = self.client.get(url.clone()).send().map_err(network)?;
        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "non-success status; parsing body anyway");
        }
        let body = resp.text().map_err(network)?;
        debug!(bytes = body.len(), "body read");

        let doc = RawDocument::new(url.clone(), status.as_u16(), body);
        info!(status = doc.status, bytes = doc.body.len(), "fetched");
        Ok(doc)
    }
}

/// Serves fixed markup. Handy for tests and offline runs.
#[derive(Debug, Clone)]
pub struct StaticFetcher {
    status: u16,
    body: String,
}

impl StaticFetcher {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}

impl Fetch for StaticFetcher {
    fn fetch(&self, url: &Url) -> Result<RawDocument> {
        debug!(%url, bytes = self.body.len(), "serving static markup");
        Ok(RawDocument::new(url.clone(), self.status, self.body.clone()))
    }
}

pub fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| ScrapeError::Config(format!("parsing URL {raw}: {e}")))
}
