//! Field extraction rules for a single ad fragment.
//!
//! Every rule returns plain text and degrades to the empty string when the
//! element it looks for is missing.

use super::tree::{by_class, find_first, MarkupNode};

pub const TITLE_CLASS: &str = "aditem-detail-title";
pub const PRICE_CLASS: &str = "aditem-price";
pub const YEAR_CLASS: &str = "ano";
pub const KMS_CLASS: &str = "kms";
pub const LOCATION_CLASS: &str = "x4";
pub const AGE_CLASS: &str = "x6";

const TITLE_SEPARATOR: &str = " - ";
const CURRENCY: &str = "€";

/// Longer words first so "horas" is not cut down to "hs"
const AGE_UNITS: [(&str, &str); 4] = [("horas", "h"), ("hora", "h"), ("días", "d"), ("día", "d")];

fn leading_text_of<N: MarkupNode>(item: N, class: &str) -> String {
    find_first(item, by_class(class))
        .map(|node| node.leading_text())
        .unwrap_or_default()
}

pub fn title<N: MarkupNode>(item: N) -> String {
    leading_text_of(item, TITLE_CLASS)
}

/// Splits "CBR600 - Honda" into `("CBR600", "Honda")`.
///
/// Titles with no separator, or with more than one, give two empty strings.
pub fn model_make(title: &str) -> (String, String) {
    let parts: Vec<&str> = title.split(TITLE_SEPARATOR).collect();
    match parts.as_slice() {
        [model, make] => (model.to_string(), make.to_string()),
        _ => (String::new(), String::new()),
    }
}

pub fn price<N: MarkupNode>(item: N) -> String {
    leading_text_of(item, PRICE_CLASS) + CURRENCY
}

pub fn year<N: MarkupNode>(item: N) -> String {
    leading_text_of(item, YEAR_CLASS)
}

pub fn kms<N: MarkupNode>(item: N) -> String {
    leading_text_of(item, KMS_CLASS)
}

/// Absolute detail link built from the first attribute of the title element
pub fn url<N: MarkupNode>(item: N, detail_base: &str) -> String {
    find_first(item, by_class(TITLE_CLASS))
        .and_then(|node| node.first_attr_value())
        .map(|path| [detail_base, path.as_str()].join("/"))
        .unwrap_or_default()
}

pub fn location<N: MarkupNode>(item: N) -> String {
    region(&leading_text_of(item, LOCATION_CLASS))
}

/// "Madrid (Centro)" gives "Centro"
pub fn region(locality: &str) -> String {
    match locality.split('(').nth(1) {
        Some(inner) => inner.strip_suffix(')').unwrap_or(inner).to_string(),
        None => String::new(),
    }
}

pub fn age<N: MarkupNode>(item: N) -> String {
    abbreviate_age(&leading_text_of(item, AGE_CLASS))
}

/// Replaces Spanish time units with one-letter abbreviations in a single
/// left-to-right pass, trying [`AGE_UNITS`] in order at each position.
pub fn abbreviate_age(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    'scan: while let Some(ch) = rest.chars().next() {
        for (long, short) in AGE_UNITS {
            if let Some(tail) = rest.strip_prefix(long) {
                out.push_str(short);
                rest = tail;
                continue 'scan;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}
