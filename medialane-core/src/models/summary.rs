use super::Map;

/// Dashboard totals over a derived view
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ViewSummary {
    /// The number of records in the view
    pub count: usize,
    /// The sum of the record prices (malformed prices count as 0)
    pub total_value: f64,
    /// Record counts per category, in order of first appearance.
    /// Records without a category are counted under the empty string.
    pub by_category: Map<String, usize>,
}
