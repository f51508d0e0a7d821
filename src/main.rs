mod models;
mod parsing;
mod scrapers;

use scrapers::{scrape_listing, MilanunciosClient, SearchFilter};
use tokio::io::AsyncWriteExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout carries the JSON result
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!("🏍️ Moto Scout - Milanuncios listing scraper");

    let filter = SearchFilter::default();
    let client = MilanunciosClient::new()?;

    let listing = scrape_listing(&client, client.site(), &filter).await?;

    let json = serde_json::to_string_pretty(&listing)?;
    let mut stdout = tokio::io::stdout();
    stdout.write_all(json.as_bytes()).await?;
    stdout.flush().await?;

    info!("✅ Wrote {} ads ({} pages in total)", listing.ads.len(), listing.pages);

    Ok(())
}
