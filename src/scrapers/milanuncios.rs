use crate::models::ListingPage;
use crate::parsing::{estimate_pages, parse_ads};
use crate::scrapers::traits::DocumentProvider;
use crate::scrapers::types::{SearchFilter, SiteConfig};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Url};
use scraper::Html;
use std::time::Duration;
use tracing::{debug, info, warn};

/// HTTP client for the milanuncios motorcycle listings
pub struct MilanunciosClient {
    client: Client,
    site: SiteConfig,
}

impl MilanunciosClient {
    /// Create a client for the default site settings
    pub fn new() -> Result<Self> {
        Self::with_site(SiteConfig::default())
    }

    /// Create a client for custom site settings
    pub fn with_site(site: SiteConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(site.timeout_secs))
            .user_agent(site.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, site })
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    fn listing_url(&self, filter: &SearchFilter) -> Result<Url> {
        let mut url = Url::parse(&self.site.listing_url())
            .with_context(|| format!("Invalid listing URL: {}", self.site.listing_url()))?;
        url.query_pairs_mut().extend_pairs(filter.query_pairs());
        Ok(url)
    }
}

#[async_trait]
impl DocumentProvider for MilanunciosClient {
    async fn fetch_listing(&self, filter: &SearchFilter) -> Result<String> {
        let url = self.listing_url(filter)?;
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch listing page")?;

        if !response.status().is_success() {
            warn!("{} returned status: {}", self.source_name(), response.status());
            anyhow::bail!("Failed to fetch listing page: {}", response.status());
        }

        let html = response
            .text_with_charset(&self.site.charset)
            .await
            .context("Failed to decode response body")?;

        debug!("Downloaded {} bytes of HTML", html.len());
        Ok(html)
    }

    fn source_name(&self) -> &'static str {
        "Milanuncios"
    }
}

/// Fetch the first results page and extract its ads and page count
pub async fn scrape_listing(
    provider: &dyn DocumentProvider,
    site: &SiteConfig,
    filter: &SearchFilter,
) -> Result<ListingPage> {
    info!("Starting {} scrape for {}", provider.source_name(), site.category);

    let html = provider.fetch_listing(filter).await?;
    Ok(parse_listing(&html, site))
}

/// Extract ads and page count from an already fetched page
pub fn parse_listing(html: &str, site: &SiteConfig) -> ListingPage {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let pages = estimate_pages(root);
    info!("PAGES: {}", pages);

    let ads = parse_ads(root, &site.detail_base());
    if ads.is_empty() {
        warn!("No ads found on listing page");
    } else {
        info!("Extracted {} ads", ads.len());
    }

    ListingPage {
        pages,
        scraped_at: Utc::now(),
        ads,
    }
}
