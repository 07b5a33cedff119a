use super::{Price, RecordId};
use crate::ports::Listable;
use time::OffsetDateTime;

/// A royalty or sale payment attached to an asset
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RevenueRecord {
    /// Unique identifier for the payment
    pub id: RecordId,
    /// The name of the asset that earned or cost the payment
    #[cfg_attr(feature = "serde", serde(default))]
    pub asset: String,
    /// The other side of the payment
    #[cfg_attr(feature = "serde", serde(default))]
    pub counterparty: Option<String>,
    /// "incoming" or "outgoing"; filtered as the category
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: Option<String>,
    /// e.g. "claimed", "pending"
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<String>,
    /// The amount paid
    #[cfg_attr(feature = "serde", serde(default))]
    pub amount: Option<Price>,
    /// When the payment was recorded
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

impl Listable for RevenueRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [Some(self.asset.as_str()), self.counterparty.as_deref()]
            .into_iter()
            .flatten()
    }

    fn category(&self) -> Option<&str> {
        self.direction.as_deref()
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn price(&self) -> Option<&Price> {
        self.amount.as_ref()
    }

    fn timestamp(&self) -> Option<OffsetDateTime> {
        self.created_at
    }
}
