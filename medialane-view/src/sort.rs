use medialane_core::{models::SortKey, ports::Listable};
use std::cmp::Ordering;

/// A total order over two records
pub type Comparator<R> = fn(&R, &R) -> Ordering;

/// The comparator selected by a sort key.
///
/// Every comparator is a total order. Equal keys compare `Equal`, so a stable
/// sort keeps such records in their collection order.
pub fn comparator<R: Listable>(key: SortKey) -> Comparator<R> {
    match key {
        SortKey::PriceHigh => price_high::<R>,
        SortKey::PriceLow => price_low::<R>,
        SortKey::Recent => recent::<R>,
        SortKey::Oldest => oldest::<R>,
        SortKey::Popularity => popularity::<R>,
    }
}

// Prices are finite by construction, so partial_cmp never gives None here.
fn compare_prices(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn price_high<R: Listable>(a: &R, b: &R) -> Ordering {
    compare_prices(b.price_value(), a.price_value())
}

fn price_low<R: Listable>(a: &R, b: &R) -> Ordering {
    compare_prices(a.price_value(), b.price_value())
}

fn recent<R: Listable>(a: &R, b: &R) -> Ordering {
    b.recency().cmp(&a.recency())
}

fn oldest<R: Listable>(a: &R, b: &R) -> Ordering {
    a.recency().cmp(&b.recency())
}

fn popularity<R: Listable>(a: &R, b: &R) -> Ordering {
    b.engagement().cmp(&a.engagement())
}
