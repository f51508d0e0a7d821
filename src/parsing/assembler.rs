use super::fields;
use super::tree::{by_class, find_all, MarkupNode};
use crate::models::Ad;
use tracing::debug;

pub const AD_ITEM_CLASS: &str = "aditem";

/// Builds one [`Ad`] per ad fragment under `root`, in document order.
pub fn parse_ads<N: MarkupNode>(root: N, detail_base: &str) -> Vec<Ad> {
    let items = find_all(root, by_class(AD_ITEM_CLASS));
    debug!("Found {} ad fragments", items.len());

    items.into_iter().map(|item| assemble_ad(item, detail_base)).collect()
}

fn assemble_ad<N: MarkupNode>(item: N, detail_base: &str) -> Ad {
    let (model, make) = fields::model_make(&fields::title(item));

    Ad {
        age: fields::age(item),
        price: fields::price(item),
        year: fields::year(item),
        kms: fields::kms(item),
        make,
        model,
        location: fields::location(item),
        url: fields::url(item, detail_base),
    }
}
