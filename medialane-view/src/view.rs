use crate::{Filter, comparator};
use medialane_core::{
    models::{Criteria, PageRequest, ViewPage},
    ports::Listable,
};
use tracing::{Level, event};

/// Derive the view of `records` selected by `criteria`.
///
/// Records are kept when they pass every active predicate (text, category,
/// status and time window), then stably sorted by the comparator of the sort
/// key. The input is never modified and identical inputs always give the
/// same output, so this is safe to call on every interaction.
pub fn derive_view<'a, R: Listable>(records: &'a [R], criteria: &Criteria) -> Vec<&'a R> {
    let filter = Filter::new(criteria);
    let order = comparator::<R>(criteria.sort);

    let mut view: Vec<&R> = records
        .iter()
        .filter(|record| filter.accepts(*record))
        .collect();
    // sort_by is stable: ties keep their collection order
    view.sort_by(|a, b| order(*a, *b));

    event!(
        Level::DEBUG,
        records = records.len(),
        kept = view.len(),
        sort = criteria.sort.as_str(),
        "derived view"
    );
    view
}

/// Derive the view of `records` and cut out the requested page.
///
/// Pages past the end are empty but still report the view's total.
pub fn derive_page<'a, R: Listable>(
    records: &'a [R],
    criteria: &Criteria,
    request: PageRequest,
) -> ViewPage<&'a R> {
    let request = request.normalized();
    let view = derive_view(records, criteria);
    let total = view.len();
    let offset = request.offset();

    let results: Vec<&R> = view
        .into_iter()
        .skip(offset)
        .take(request.per_page)
        .collect();
    let more = (offset.saturating_add(request.per_page) < total).then(|| request.next());

    ViewPage {
        results,
        total,
        more,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medialane_core::models::{Asset, SortKey};

    fn assets(n: u64) -> Vec<Asset> {
        (1..=n).map(|id| Asset::new(id, format!("asset-{id}"))).collect()
    }

    #[test]
    fn pages_walk_the_view() {
        let records = assets(5);
        let criteria = Criteria::sorted_by(SortKey::Oldest);

        let first = derive_page(&records, &criteria, PageRequest::new(1, 2));
        assert_eq!(first.total, 5);
        let names: Vec<&str> = first.results.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["asset-1", "asset-2"]);
        assert_eq!(first.more, Some(PageRequest::new(2, 2)));

        let last = derive_page(&records, &criteria, PageRequest::new(3, 2));
        assert_eq!(last.results.len(), 1);
        assert_eq!(last.results[0].name, "asset-5");
        assert_eq!(last.more, None);
    }

    #[test]
    fn pages_past_the_end_are_empty() {
        let records = assets(3);
        let page = derive_page(&records, &Criteria::default(), PageRequest::new(9, 10));
        assert!(page.results.is_empty());
        assert_eq!(page.total, 3);
        assert_eq!(page.more, None);
    }

    #[test]
    fn zero_page_size_uses_the_default() {
        let records = assets(20);
        let page = derive_page(&records, &Criteria::default(), PageRequest::new(0, 0));
        assert_eq!(page.results.len(), PageRequest::DEFAULT_PER_PAGE);
        assert_eq!(page.results[0].name, "asset-20");
    }
}
