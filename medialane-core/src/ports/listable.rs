use crate::models::{Price, RecordId};
use time::OffsetDateTime;

/// A record that can appear in a filtered and sorted list view.
///
/// Implementations only expose their fields; every interpretation (case
/// folding, price parsing, ordering) belongs to the derivation engine, so that
/// all record kinds are treated by one policy.
///
/// Absent values are reported as `None` and are read as the empty string (for
/// text), 0 (for prices and counters), or "no timestamp".
pub trait Listable {
    /// The record's identifier
    fn id(&self) -> &RecordId;

    /// The fields searched by free-text queries (name or title, creator or author, ...)
    fn search_fields(&self) -> impl Iterator<Item = &str>;

    /// The category discriminator (category, license type, payment direction)
    fn category(&self) -> Option<&str>;

    /// The status discriminator
    fn status(&self) -> Option<&str>;

    /// The price that price orderings compare
    fn price(&self) -> Option<&Price>;

    /// When the record was created, if known
    fn timestamp(&self) -> Option<OffsetDateTime>;

    /// A counter of likes, backers, holders or similar
    fn engagement(&self) -> u64 {
        0
    }

    /// The numeric price, with missing or malformed prices worth 0
    fn price_value(&self) -> f64 {
        Price::value_of(self.price())
    }

    /// The creation order: the timestamp in unix seconds when present,
    /// otherwise the numeric id, otherwise 0.
    fn recency(&self) -> i64 {
        self.timestamp()
            .map(OffsetDateTime::unix_timestamp)
            .unwrap_or_else(|| self.id().order_key())
    }
}
