use medialane_core::{
    models::{Asset, Criteria, Selection, SortKey, TimeRange},
    ports::Listable,
};
use medialane_view::{comparator, derive_view, matches_range, matches_selection, matches_text};
use rstest::*;
use rstest_reuse::{self, *};
use std::{cmp::Ordering, collections::BTreeSet};
use time::macros::datetime;

use all_sort_keys::all_sort_keys;

mod catalog;
use catalog::{assets, ids};

#[apply(all_sort_keys)]
fn derivation_is_idempotent(#[case] sort: SortKey, assets: Vec<Asset>) {
    let criteria = Criteria::sorted_by(sort).with_status("listed");
    let first = derive_view(&assets, &criteria);
    let second = derive_view(&assets, &criteria);
    assert_eq!(ids(&first), ids(&second));
}

#[apply(all_sort_keys)]
fn views_are_ordered_by_their_comparator(#[case] sort: SortKey, assets: Vec<Asset>) {
    let order = comparator::<Asset>(sort);
    let view = derive_view(&assets, &Criteria::sorted_by(sort));
    for pair in view.windows(2) {
        assert_ne!(order(pair[0], pair[1]), Ordering::Greater);
    }
}

#[apply(all_sort_keys)]
fn default_criteria_pass_everything_through(#[case] sort: SortKey, assets: Vec<Asset>) {
    let view = derive_view(&assets, &Criteria::sorted_by(sort));
    let kept: BTreeSet<String> = ids(&view).into_iter().collect();
    let all: BTreeSet<String> = assets.iter().map(|a| a.id.to_string()).collect();
    assert_eq!(view.len(), assets.len());
    assert_eq!(kept, all);
}

#[apply(all_sort_keys)]
fn derivation_leaves_the_input_alone(#[case] sort: SortKey, assets: Vec<Asset>) {
    let before = assets.clone();
    let _ = derive_view(&assets, &Criteria::sorted_by(sort).with_query("a"));
    assert_eq!(assets, before);
}

#[apply(all_sort_keys)]
fn empty_collections_give_empty_views(#[case] sort: SortKey) {
    let empty: Vec<Asset> = Vec::new();
    let criteria = Criteria::sorted_by(sort)
        .with_query("anything")
        .with_category("Art");
    assert!(derive_view(&empty, &criteria).is_empty());
}

#[rstest]
#[case::text(Criteria::default().with_query("lagos"))]
#[case::category(Criteria::default().with_category("ART"))]
#[case::status(Criteria::default().with_status("listed"))]
#[case::text_and_category(Criteria::default().with_query("dj").with_category("music"))]
#[case::everything(
    Criteria::default()
        .with_query("a")
        .with_category("art")
        .with_status("LISTED")
        .with_range(TimeRange::new(Some(datetime!(2024-01-01 0:00 UTC)), None).unwrap())
)]
#[case::nothing(Criteria::default().with_category("Film"))]
fn filters_are_a_conjunction(#[case] criteria: Criteria, assets: Vec<Asset>) {
    let view = derive_view(&assets, &criteria);
    let kept: BTreeSet<String> = ids(&view).into_iter().collect();

    for asset in &assets {
        let passes = matches_text(asset, &criteria.query)
            && matches_selection(asset.category(), &criteria.category)
            && matches_selection(asset.status(), &criteria.status)
            && matches_range(asset.timestamp(), &criteria.range);
        assert_eq!(
            kept.contains(&asset.id.to_string()),
            passes,
            "record {} disagrees with its predicates",
            asset.id
        );
    }
}

#[rstest]
fn price_high_never_increases(assets: Vec<Asset>) {
    let view = derive_view(&assets, &Criteria::sorted_by(SortKey::PriceHigh));
    for pair in view.windows(2) {
        assert!(pair[0].price_value() >= pair[1].price_value());
    }
    assert_eq!(ids(&view), ["0xabc", "3", "2", "6", "1", "4", "5"]);
}

#[rstest]
fn price_low_never_decreases(assets: Vec<Asset>) {
    let view = derive_view(&assets, &Criteria::sorted_by(SortKey::PriceLow));
    for pair in view.windows(2) {
        assert!(pair[0].price_value() <= pair[1].price_value());
    }
    assert_eq!(ids(&view), ["4", "5", "1", "2", "6", "3", "0xabc"]);
}

#[rstest]
fn missing_and_malformed_prices_sort_as_zero(assets: Vec<Asset>) {
    // id 4 has no price and id 5 prices itself as "free"
    let view = derive_view(&assets, &Criteria::sorted_by(SortKey::PriceLow));
    assert_eq!(view[0].price_value(), 0.0);
    assert_eq!(view[1].price_value(), 0.0);
    assert_eq!(ids(&view[..2]), ["4", "5"]);
}

#[rstest]
fn ties_keep_collection_order(assets: Vec<Asset>) {
    let view = derive_view(&assets, &Criteria::sorted_by(SortKey::Popularity));
    assert_eq!(ids(&view), ["2", "6", "1", "4", "3", "0xabc", "5"]);

    let mut reversed = assets.clone();
    reversed.reverse();
    let view = derive_view(&reversed, &Criteria::sorted_by(SortKey::Popularity));
    assert_eq!(ids(&view[..2]), ["6", "2"]);
}

#[rstest]
fn recent_prefers_timestamps_then_ids(assets: Vec<Asset>) {
    let view = derive_view(&assets, &Criteria::sorted_by(SortKey::Recent));
    assert_eq!(ids(&view), ["4", "0xabc", "2", "1", "6", "3", "5"]);

    let view = derive_view(&assets, &Criteria::sorted_by(SortKey::Oldest));
    assert_eq!(ids(&view), ["5", "3", "6", "1", "2", "0xabc", "4"]);
}

#[rstest]
fn unknown_sort_tokens_order_by_recency(assets: Vec<Asset>) {
    let fallback = Criteria::sorted_by(SortKey::from_token("most-viewed"));
    let recent = Criteria::sorted_by(SortKey::Recent);
    assert_eq!(
        ids(&derive_view(&assets, &fallback)),
        ids(&derive_view(&assets, &recent))
    );
}

#[rstest]
fn discriminators_ignore_case(assets: Vec<Asset>) {
    let criteria = Criteria::sorted_by(SortKey::Oldest).with_category("MUSIC");
    assert_eq!(ids(&derive_view(&assets, &criteria)), ["2", "4"]);

    let criteria = Criteria::sorted_by(SortKey::Oldest).with_status(Selection::from("listed"));
    assert_eq!(
        ids(&derive_view(&assets, &criteria)),
        ["6", "1", "2", "0xabc", "4"]
    );
}

#[rstest]
fn time_ranges_drop_undated_records(assets: Vec<Asset>) {
    let range = TimeRange::new(
        Some(datetime!(2024-01-01 0:00 UTC)),
        Some(datetime!(2024-03-31 23:59 UTC)),
    )
    .unwrap();
    let criteria = Criteria::sorted_by(SortKey::Oldest).with_range(range);
    assert_eq!(ids(&derive_view(&assets, &criteria)), ["6", "1", "2"]);
}
