use super::{Price, RecordId};
use crate::ports::Listable;
use time::OffsetDateTime;

/// A fungible token minted against an IP asset and traded in the token marketplace
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Token {
    /// Unique identifier for the token
    pub id: RecordId,
    /// Display name
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Ticker symbol
    #[cfg_attr(feature = "serde", serde(default))]
    pub symbol: Option<String>,
    /// The issuer
    #[cfg_attr(feature = "serde", serde(default))]
    pub creator: Option<String>,
    /// The category of the underlying asset
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Option<String>,
    /// e.g. "trading", "paused"
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<String>,
    /// Unit price
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: Option<Price>,
    /// Number of holders
    #[cfg_attr(feature = "serde", serde(default))]
    pub holders: Option<u64>,
    /// When the token was minted
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

impl Token {
    /// A token with only an id, a name and a unit price
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: None,
            creator: None,
            category: None,
            status: None,
            price: Some(price),
            holders: None,
            created_at: None,
        }
    }
}

impl Listable for Token {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.name.as_str()),
            self.symbol.as_deref(),
            self.creator.as_deref(),
        ]
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
        self.holders.unwrap_or(0)
    }
}
