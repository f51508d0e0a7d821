use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One classified listing as published on the results page.
///
/// Every field is plain text and defaults to the empty string, a missing
/// element on the page leaves its field empty instead of dropping the ad.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Ad {
    /// Time since posting with abbreviated units ("2 h", "3 d")
    pub age: String,
    /// Price text with the currency symbol appended
    pub price: String,
    pub year: String,
    pub kms: String,
    pub make: String,
    pub model: String,
    /// Region name found between parentheses in the locality text
    pub location: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// Result of scraping the first page of a search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingPage {
    /// Estimated number of result pages, always at least 1
    pub pages: u32,
    pub scraped_at: DateTime<Utc>,
    pub ads: Vec<Ad>,
}
