use super::{Price, RecordId};
use crate::ports::Listable;
use time::OffsetDateTime;

/// A tokenized piece of intellectual property offered on the marketplace
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Asset {
    /// Unique identifier for the asset
    pub id: RecordId,
    /// Display name
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// The creator's handle or address
    #[cfg_attr(feature = "serde", serde(default))]
    pub creator: Option<String>,
    /// e.g. "Art", "Music", "Patents"
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Option<String>,
    /// e.g. "listed", "sold", "draft"
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<String>,
    /// Asking price
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: Option<Price>,
    /// Number of likes
    #[cfg_attr(feature = "serde", serde(default))]
    pub likes: Option<u64>,
    /// When the asset was registered
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

impl Asset {
    /// An asset with only an id and a name
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            creator: None,
            category: None,
            status: None,
            price: None,
            likes: None,
            created_at: None,
        }
    }
}

impl Listable for Asset {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [Some(self.name.as_str()), self.creator.as_deref()]
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
        self.price.as_ref()
    }

    fn timestamp(&self) -> Option<OffsetDateTime> {
        self.created_at
    }

    fn engagement(&self) -> u64 {
        self.likes.unwrap_or(0)
    }
}
