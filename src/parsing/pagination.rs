use super::tree::{by_class, find_all, find_first, MarkupNode};
use tracing::debug;

pub const PAGE_LINK_CLASS: &str = "adlist-paginator-pagelink";
pub const SUMMARY_CLASS: &str = "adlist-paginator-summary";

/// Estimates how many result pages the search has.
///
/// Page links give a first guess (the last link is "next", not a page). A
/// summary such as "1-20 de 83" overrides it when it can be read.
pub fn estimate_pages<N: MarkupNode>(root: N) -> u32 {
    let from_links = pages_from_links(root);

    match pages_from_summary(root) {
        Some(pages) => pages,
        None => {
            debug!("No usable paginator summary, using {} from page links", from_links);
            from_links
        }
    }
}

fn pages_from_links<N: MarkupNode>(root: N) -> u32 {
    let links = find_all(root, by_class(PAGE_LINK_CLASS)).len();
    if links > 1 {
        u32::try_from(links - 1).unwrap_or(u32::MAX)
    } else {
        1
    }
}

fn pages_from_summary<N: MarkupNode>(root: N) -> Option<u32> {
    let summary = find_first(root, by_class(SUMMARY_CLASS))?.text_content();
    total_from_summary(&summary)
}

/// Reads the total out of "<start> de <total>"
fn total_from_summary(summary: &str) -> Option<u32> {
    let total = summary.split("de").nth(1)?.trim();
    match total.parse::<u32>() {
        Ok(pages) if pages > 0 => Some(pages),
        _ => {
            debug!("Unreadable paginator summary: {:?}", summary);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn page(links: usize, summary: Option<&str>) -> Html {
        let mut html = String::from("<html><body><div class=\"adlist-paginator\">");
        if let Some(text) = summary {
            html.push_str(&format!("<div class=\"adlist-paginator-summary\">{text}</div>"));
        }
        for i in 0..links {
            html.push_str(&format!("<a class=\"adlist-paginator-pagelink\" href=\"?pagina={}\">{}</a>", i + 1, i + 1));
        }
        html.push_str("</div></body></html>");
        Html::parse_document(&html)
    }

    #[test]
    fn test_defaults_to_one_page() {
        assert_eq!(estimate_pages(page(0, None).root_element()), 1);
        assert_eq!(estimate_pages(page(1, None).root_element()), 1);
    }

    #[test]
    fn test_link_count_minus_next_control() {
        assert_eq!(estimate_pages(page(2, None).root_element()), 1);
        assert_eq!(estimate_pages(page(5, None).root_element()), 4);
    }

    #[test]
    fn test_summary_overrides_links() {
        assert_eq!(estimate_pages(page(5, Some("1-20 de 83")).root_element()), 83);
        assert_eq!(estimate_pages(page(0, Some("1-20 de 83")).root_element()), 83);
    }

    #[test]
    fn test_summary_without_token_falls_back() {
        assert_eq!(estimate_pages(page(5, Some("1-20 of 83")).root_element()), 4);
        assert_eq!(estimate_pages(page(0, Some("")).root_element()), 1);
    }

    #[test]
    fn test_summary_with_non_numeric_total_falls_back() {
        assert_eq!(estimate_pages(page(5, Some("1-20 de muchos")).root_element()), 4);
        assert_eq!(estimate_pages(page(3, Some("1-20 de 83 de 90")).root_element()), 83);
    }

    #[test]
    fn test_summary_with_markup_inside() {
        let doc = Html::parse_document(
            r#"<body><div class="adlist-paginator-summary">1-20 de <strong> 120 </strong></div></body>"#,
        );
        assert_eq!(estimate_pages(doc.root_element()), 120);
    }

    #[test]
    fn test_total_from_summary() {
        assert_eq!(total_from_summary("1-20 de 83"), Some(83));
        assert_eq!(total_from_summary("de"), None);
        assert_eq!(total_from_summary("1-20 de 0"), None);
        assert_eq!(total_from_summary("83"), None);
    }
}
