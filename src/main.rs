use anyhow::{Context, Result};
use prizescraper::{fetch_prize_table, ScrapeConfig};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let config = ScrapeConfig::default();
    info!(url = %config.url, "startup");

    let table = fetch_prize_table(&config)
        .with_context(|| format!("scraping prize table from {}", config.url))?;

    println!("{table}");
    Ok(())
}
