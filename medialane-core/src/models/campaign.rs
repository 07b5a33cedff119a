use super::{Price, RecordId};
use crate::ports::Listable;
use time::OffsetDateTime;

/// A crowdfunding campaign backing the creation of a new IP asset
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Campaign {
    /// Unique identifier for the campaign
    pub id: RecordId,
    /// Campaign title
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    /// The campaign owner
    #[cfg_attr(feature = "serde", serde(default))]
    pub creator: Option<String>,
    /// The kind of work being funded
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Option<String>,
    /// e.g. "active", "funded", "ended"
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<String>,
    /// The funding goal, which is what price orderings compare
    #[cfg_attr(feature = "serde", serde(default))]
    pub goal: Option<Price>,
    /// Funds raised so far
    #[cfg_attr(feature = "serde", serde(default))]
    pub raised: Option<Price>,
    /// Number of backers
    #[cfg_attr(feature = "serde", serde(default))]
    pub backers: Option<u64>,
    /// When the campaign was opened
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            with = "time::serde::rfc3339::option",
            skip_serializing_if = "Option::is_none"
        )
    )]
    #[cfg_attr(feature = "schemars", schemars(with = "Option<String>"))]
    pub created_at: Option<OffsetDateTime>,
}

impl Listable for Campaign {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [Some(self.title.as_str()), self.creator.as_deref()]
            .into_iter()
            .flatten()
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn price(&self) -> Option<&Price> {
        self.goal.as_ref()
    }

    fn timestamp(&self) -> Option<OffsetDateTime> {
        self.created_at
    }

    fn engagement(&self) -> u64 {
        self.backers.unwrap_or(0)
    }
}
