/// A displayed price: an amount as entered, paired with its currency symbol.
///
/// Amounts are kept as strings because that is how listings carry them
/// ("0.25", "1,200"). Interpretation is deferred to [`Price::value`], which is
/// total: anything that does not read as a finite number is worth 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Price {
    /// The amount, as displayed
    pub amount: String,
    /// The currency symbol (e.g. "ETH", "STRK")
    #[cfg_attr(feature = "serde", serde(default))]
    pub currency: String,
}

impl Price {
    /// Create a price from an amount and a currency symbol
    pub fn new(amount: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
        }
    }

    /// The numeric value of the amount, or 0.0 if it is not a finite number.
    ///
    /// Surrounding whitespace and the digit separators `,` and `_` are ignored.
    pub fn value(&self) -> f64 {
        let cleaned: String = self
            .amount
            .trim()
            .chars()
            .filter(|c| *c != ',' && *c != '_')
            .collect();

        match cleaned.parse::<f64>() {
            Ok(x) if x.is_finite() => x,
            _ => 0.0,
        }
    }

    /// The numeric value of an optional price (missing prices are worth 0.0)
    pub fn value_of(price: Option<&Price>) -> f64 {
        price.map(Price::value).unwrap_or(0.0)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.currency.is_empty() {
            write!(f, "{}", self.amount)
        } else {
            write!(f, "{} {}", self.amount, self.currency)
        }
    }
}
