use std::{convert::Infallible, fmt, str::FromStr};
use thiserror::Error;
use time::OffsetDateTime;

/// The user-controlled configuration a list view is derived from.
///
/// Criteria are created with default values when a view is opened, replaced
/// on every interaction, and carry no state between derivations.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Criteria {
    /// Free text matched against the searchable fields of each record
    pub query: String,
    /// The selected category (or license type, or direction)
    #[cfg_attr(feature = "schemars", schemars(with = "String"))]
    pub category: Selection,
    /// The selected status
    #[cfg_attr(feature = "schemars", schemars(with = "String"))]
    pub status: Selection,
    /// The ordering of the derived view
    #[cfg_attr(feature = "schemars", schemars(with = "String"))]
    pub sort: SortKey,
    /// An optional window on the record timestamps
    pub range: TimeRange,
}

impl Criteria {
    /// Criteria that keep every record and order them by `sort`
    pub fn sorted_by(sort: SortKey) -> Self {
        Self {
            sort,
            ..Default::default()
        }
    }

    /// Replace the free-text query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Replace the category selection
    pub fn with_category(mut self, category: impl Into<Selection>) -> Self {
        self.category = category.into();
        self
    }

    /// Replace the status selection
    pub fn with_status(mut self, status: impl Into<Selection>) -> Self {
        self.status = status.into();
        self
    }

    /// Replace the time window
    pub fn with_range(mut self, range: TimeRange) -> Self {
        self.range = range;
        self
    }
}

/// A discriminator selection: either the `all` sentinel or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Selection {
    /// Matches every record
    #[default]
    All,
    /// Matches records whose field equals this value
    Only(String),
}

impl Selection {
    /// The sentinel token selecting every record
    pub const ALL: &'static str = "all";
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::ALL) {
            Self::All
        } else {
            Self::Only(trimmed.to_owned())
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Selection> for String {
    fn from(value: Selection) -> Self {
        match value {
            Selection::All => Selection::ALL.to_owned(),
            Selection::Only(value) => value,
        }
    }
}

impl FromStr for Selection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL),
            Self::Only(value) => f.write_str(value),
        }
    }
}

/// The ordering applied to a derived view.
///
/// Parsing a token never fails: anything unrecognized orders by recency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum SortKey {
    /// Most expensive first
    PriceHigh,
    /// Cheapest first
    PriceLow,
    /// Newest first
    #[default]
    Recent,
    /// Oldest first
    Oldest,
    /// Most engagement (likes, backers, holders) first
    Popularity,
}

impl SortKey {
    /// Resolve a sort-key token, falling back to [`SortKey::Recent`]
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "price-high" => Self::PriceHigh,
            "price-low" => Self::PriceLow,
            "recent" | "newest" => Self::Recent,
            "oldest" => Self::Oldest,
            "likes" | "popularity" => Self::Popularity,
            _ => Self::Recent,
        }
    }

    /// The canonical token for this key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceHigh => "price-high",
            Self::PriceLow => "price-low",
            Self::Recent => "recent",
            Self::Oldest => "oldest",
            Self::Popularity => "popularity",
        }
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        Self::from_token(value)
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        Self::from_token(&value)
    }
}

impl From<SortKey> for String {
    fn from(value: SortKey) -> Self {
        value.as_str().to_owned()
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_token(s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inclusive window on record timestamps. Either bound may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeRange {
    /// Keep records at or after this instant
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            with = "time::serde::rfc3339::option",
            skip_serializing_if = "Option::is_none"
        )
    )]
    #[cfg_attr(feature = "schemars", schemars(with = "Option<String>"))]
    pub after: Option<OffsetDateTime>,
    /// Keep records at or before this instant
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            with = "time::serde::rfc3339::option",
            skip_serializing_if = "Option::is_none"
        )
    )]
    #[cfg_attr(feature = "schemars", schemars(with = "Option<String>"))]
    pub before: Option<OffsetDateTime>,
}

impl TimeRange {
    /// Build a window, rejecting one that ends before it starts
    pub fn new(
        after: Option<OffsetDateTime>,
        before: Option<OffsetDateTime>,
    ) -> Result<Self, RangeError> {
        match (after, before) {
            (Some(a), Some(b)) if a > b => Err(RangeError::Inverted { after: a, before: b }),
            _ => Ok(Self { after, before }),
        }
    }

    /// Whether neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.after.is_none() && self.before.is_none()
    }
}

/// The ways a time window can be invalid
#[derive(Debug, Error, PartialEq)]
pub enum RangeError {
    /// The lower bound is later than the upper bound
    #[error("time range starts at {after} but ends at {before}")]
    Inverted {
        /// The requested lower bound
        after: OffsetDateTime,
        /// The requested upper bound
        before: OffsetDateTime,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn all_sentinel_is_case_insensitive() {
        assert_eq!(Selection::from("all"), Selection::All);
        assert_eq!(Selection::from(" ALL "), Selection::All);
        assert_eq!(Selection::from(""), Selection::All);
        assert_eq!(Selection::from(" Music "), Selection::Only("Music".into()));
    }

    #[test]
    fn sort_tokens_and_aliases() {
        assert_eq!(SortKey::from_token("price-high"), SortKey::PriceHigh);
        assert_eq!(SortKey::from_token("price-low"), SortKey::PriceLow);
        assert_eq!(SortKey::from_token("newest"), SortKey::Recent);
        assert_eq!(SortKey::from_token("oldest"), SortKey::Oldest);
        assert_eq!(SortKey::from_token("likes"), SortKey::Popularity);
        assert_eq!(SortKey::from_token("Popularity"), SortKey::Popularity);
    }

    #[test]
    fn unknown_sort_token_falls_back_to_recent() {
        assert_eq!(SortKey::from_token("alphabetical"), SortKey::Recent);
        assert_eq!(SortKey::from_token(""), SortKey::Recent);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let early = datetime!(2024-01-01 0:00 UTC);
        let late = datetime!(2024-06-01 0:00 UTC);
        assert!(TimeRange::new(Some(early), Some(late)).is_ok());
        assert!(matches!(
            TimeRange::new(Some(late), Some(early)),
            Err(RangeError::Inverted { .. })
        ));
    }

    #[test]
    fn criteria_deserialize_with_defaults() {
        let criteria: Criteria =
            serde_json::from_str(r#"{"query": "am", "sort": "price-low"}"#).unwrap();
        assert_eq!(criteria.query, "am");
        assert_eq!(criteria.category, Selection::All);
        assert_eq!(criteria.sort, SortKey::PriceLow);
        assert!(criteria.range.is_unbounded());

        let criteria: Criteria = serde_json::from_str(r#"{"sort": "bogus"}"#).unwrap();
        assert_eq!(criteria.sort, SortKey::Recent);
    }
}
