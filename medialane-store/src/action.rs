use medialane_core::models::{Price, RecordId, Token};

/// Everything a session can do to the token marketplace
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "action", rename_all = "lowercase")
)]
pub enum Action {
    /// Add a token to the market
    List {
        /// The new token, which must carry a positive price
        token: Token,
    },
    /// Remove a token that is no longer held
    Delist {
        /// The token to remove
        id: RecordId,
    },
    /// Change the listed price of a token
    Reprice {
        /// The token to reprice
        id: RecordId,
        /// The new, positive, unit price
        price: Price,
    },
    /// Buy units at the listed price
    Buy {
        /// The token to buy
        id: RecordId,
        /// Units to buy
        quantity: f64,
    },
    /// Sell held units at the listed price
    Sell {
        /// The token to sell
        id: RecordId,
        /// Units to sell
        quantity: f64,
    },
    /// Add cash to the balance
    Deposit {
        /// The amount to add
        amount: f64,
    },
}

impl Action {
    /// A short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::List { .. } => "list",
            Self::Delist { .. } => "delist",
            Self::Reprice { .. } => "reprice",
            Self::Buy { .. } => "buy",
            Self::Sell { .. } => "sell",
            Self::Deposit { .. } => "deposit",
        }
    }
}
