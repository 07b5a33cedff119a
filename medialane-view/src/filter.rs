use medialane_core::{
    models::{Criteria, Selection, TimeRange},
    ports::Listable,
};
use time::OffsetDateTime;

/// A free-text query, folded once so it can be tested against many records.
///
/// Matching is case-insensitive substring containment over the record's
/// search fields. No tokenization, no ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery(String);

impl TextQuery {
    /// Prepare a query. Surrounding whitespace is not part of the query.
    pub fn new(query: &str) -> Self {
        Self(fold(query))
    }

    /// Whether the query matches everything
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any search field of `record` contains the query
    pub fn matches<R: Listable + ?Sized>(&self, record: &R) -> bool {
        self.is_empty()
            || record
                .search_fields()
                .any(|field| field.to_lowercase().contains(&self.0))
    }
}

/// Whether `record` matches the free-text `query`.
///
/// An empty or whitespace-only query matches every record.
pub fn matches_text<R: Listable + ?Sized>(record: &R, query: &str) -> bool {
    TextQuery::new(query).matches(record)
}

/// Whether a discriminator value passes a selection.
///
/// `All` passes everything. Otherwise both sides are trimmed and compared
/// without regard to case. A missing value reads as the empty string.
pub fn matches_selection(value: Option<&str>, selection: &Selection) -> bool {
    match selection {
        Selection::All => true,
        Selection::Only(wanted) => fold(value.unwrap_or_default()) == fold(wanted),
    }
}

/// Whether a timestamp lies inside an inclusive time window.
///
/// Records without a timestamp pass only an unbounded window.
pub fn matches_range(timestamp: Option<OffsetDateTime>, range: &TimeRange) -> bool {
    if range.is_unbounded() {
        return true;
    }
    let Some(at) = timestamp else {
        return false;
    };
    range.after.is_none_or(|after| at >= after) && range.before.is_none_or(|before| at <= before)
}

/// The conjunction of every predicate named by a set of criteria.
///
/// Building the filter folds the query and selections once, then
/// [`Filter::accepts`] is called per record.
#[derive(Debug, Clone)]
pub struct Filter {
    text: TextQuery,
    category: Option<String>,
    status: Option<String>,
    range: TimeRange,
}

impl Filter {
    /// Prepare the predicates of `criteria`
    pub fn new(criteria: &Criteria) -> Self {
        Self {
            text: TextQuery::new(&criteria.query),
            category: folded_selection(&criteria.category),
            status: folded_selection(&criteria.status),
            range: criteria.range,
        }
    }

    /// Whether `record` passes every active predicate
    pub fn accepts<R: Listable + ?Sized>(&self, record: &R) -> bool {
        self.text.matches(record)
            && discriminates(record.category(), self.category.as_deref())
            && discriminates(record.status(), self.status.as_deref())
            && matches_range(record.timestamp(), &self.range)
    }
}

fn folded_selection(selection: &Selection) -> Option<String> {
    match selection {
        Selection::All => None,
        Selection::Only(value) => Some(fold(value)),
    }
}

fn discriminates(value: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => fold(value.unwrap_or_default()) == wanted,
    }
}

fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}
