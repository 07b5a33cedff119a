use medialane_core::{
    models::{Map, ViewSummary},
    ports::Listable,
};

/// Count, total value and per-category counts of a view.
///
/// Categories are grouped the same way selections match them: trimmed and
/// lower-cased. Records without a category are counted under `""`.
pub fn summarize<'a, R, I>(view: I) -> ViewSummary
where
    R: Listable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut summary = ViewSummary {
        count: 0,
        total_value: 0.0,
        by_category: Map::default(),
    };

    for record in view {
        summary.count += 1;
        summary.total_value += record.price_value();
        let category = record
            .category()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        summary.by_category.tally(category);
    }

    summary
}
