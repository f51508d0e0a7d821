use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Search constraints sent to the listing page.
///
/// Bounds are kept as text and passed through untouched, nothing checks that
/// a minimum is below its maximum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchFilter {
    /// Minimum price (EUR)
    pub price_min: String,
    /// Maximum price (EUR)
    pub price_max: String,
    /// Oldest registration year
    pub year_min: String,
    /// Newest registration year
    pub year_max: String,
    /// Minimum engine displacement (cc)
    pub cc_min: String,
    /// Maximum engine displacement (cc)
    pub cc_max: String,
    /// Maximum mileage (km)
    pub kms_max: String,
}

impl SearchFilter {
    pub fn new(
        price_min: impl Into<String>,
        price_max: impl Into<String>,
        year_min: impl Into<String>,
        year_max: impl Into<String>,
        cc_min: impl Into<String>,
        cc_max: impl Into<String>,
        kms_max: impl Into<String>,
    ) -> Self {
        Self {
            price_min: price_min.into(),
            price_max: price_max.into(),
            year_min: year_min.into(),
            year_max: year_max.into(),
            cc_min: cc_min.into(),
            cc_max: cc_max.into(),
            kms_max: kms_max.into(),
        }
    }

    /// Query parameters for the listing request, ordered by key.
    ///
    /// `cerca=s` is always set so listings from nearby provinces are included.
    pub fn query_pairs(&self) -> BTreeMap<&'static str, &str> {
        BTreeMap::from([
            ("desde", self.price_min.as_str()),
            ("hasta", self.price_max.as_str()),
            ("anod", self.year_min.as_str()),
            ("anoh", self.year_max.as_str()),
            ("ccd", self.cc_min.as_str()),
            ("cch", self.cc_max.as_str()),
            ("kms", self.kms_max.as_str()),
            ("cerca", "s"),
        ])
    }
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self::new("1000", "4000", "2010", "2016", "250", "800", "30000")
    }
}

/// Where and how the listing page is fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub base_url: String,
    /// Category path segment, also the prefix of every detail URL
    pub category: String,
    /// Results page under the category
    pub listing_page: String,
    /// Encoding used when the response does not declare one
    pub charset: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl SiteConfig {
    /// Base for ad detail links, e.g. `https://www.milanuncios.com/motos-de-carretera`
    pub fn detail_base(&self) -> String {
        [self.base_url.trim_end_matches('/'), self.category.as_str()].join("/")
    }

    pub fn listing_url(&self) -> String {
        [self.detail_base().as_str(), self.listing_page.as_str()].join("/")
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.milanuncios.com".to_string(),
            category: "motos-de-carretera".to_string(),
            listing_page: "abs.htm".to_string(),
            charset: "ISO-8859-1".to_string(),
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_cover_every_bound() {
        let filter = SearchFilter::new("1000", "4000", "2010", "2016", "250", "800", "30000");
        let pairs = filter.query_pairs();

        assert_eq!(pairs.len(), 8);
        assert_eq!(pairs["desde"], "1000");
        assert_eq!(pairs["hasta"], "4000");
        assert_eq!(pairs["anod"], "2010");
        assert_eq!(pairs["anoh"], "2016");
        assert_eq!(pairs["ccd"], "250");
        assert_eq!(pairs["cch"], "800");
        assert_eq!(pairs["kms"], "30000");
        assert_eq!(pairs["cerca"], "s");
    }

    #[test]
    fn test_query_pairs_pass_values_through_unvalidated() {
        let filter = SearchFilter::new("9000", "10", "", "abc", "250", "800", "1.000");
        let pairs = filter.query_pairs();

        assert_eq!(pairs["desde"], "9000");
        assert_eq!(pairs["hasta"], "10");
        assert_eq!(pairs["anod"], "");
        assert_eq!(pairs["anoh"], "abc");
        assert_eq!(pairs["kms"], "1.000");
    }

    #[test]
    fn test_query_pairs_are_sorted_by_key() {
        let keys: Vec<_> = SearchFilter::default().query_pairs().into_keys().collect();
        assert_eq!(keys, vec!["anod", "anoh", "ccd", "cch", "cerca", "desde", "hasta", "kms"]);
    }

    #[test]
    fn test_site_urls() {
        let site = SiteConfig {
            base_url: "https://example.test/".to_string(),
            ..SiteConfig::default()
        };

        assert_eq!(site.detail_base(), "https://example.test/motos-de-carretera");
        assert_eq!(site.listing_url(), "https://example.test/motos-de-carretera/abs.htm");
    }
}
