use crate::scrapers::types::SearchFilter;
use anyhow::Result;
use async_trait::async_trait;

/// Source of the raw listing page.
/// Implementations return decoded HTML text; parsing happens elsewhere.
#[async_trait]
pub trait DocumentProvider: Send + Sync {
    /// Fetch the first results page for `filter`
    async fn fetch_listing(&self, filter: &SearchFilter) -> Result<String>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
