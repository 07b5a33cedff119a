use super::{Price, RecordId};
use crate::ports::Listable;
use time::OffsetDateTime;

/// A license granted on an IP asset
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct License {
    /// Unique identifier for the license
    pub id: RecordId,
    /// The name of the licensed asset
    #[cfg_attr(feature = "serde", serde(default))]
    pub asset: String,
    /// Who holds the license
    #[cfg_attr(feature = "serde", serde(default))]
    pub licensee: Option<String>,
    /// Who granted the license
    #[cfg_attr(feature = "serde", serde(default))]
    pub licensor: Option<String>,
    /// e.g. "commercial", "personal", "exclusive"; filtered as the category
    #[cfg_attr(feature = "serde", serde(default))]
    pub license_type: Option<String>,
    /// e.g. "active", "expired", "pending"
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<String>,
    /// The license fee
    #[cfg_attr(feature = "serde", serde(default))]
    pub fee: Option<Price>,
    /// When the license was granted
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

impl Listable for License {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.asset.as_str()),
            self.licensee.as_deref(),
            self.licensor.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    fn category(&self) -> Option<&str> {
        self.license_type.as_deref()
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn price(&self) -> Option<&Price> {
        self.fee.as_ref()
    }

    fn timestamp(&self) -> Option<OffsetDateTime> {
        self.created_at
    }
}
