use medialane_core::models::{Map, RecordId, Token};

/// The token marketplace as seen by one session
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct MarketState {
    /// Listed tokens, in listing order
    pub tokens: Vec<Token>,
    /// Units held per token. Tokens no longer held have no entry.
    pub holdings: Map<RecordId, f64>,
    /// Cash available for buying
    pub balance: f64,
    /// Every executed trade, oldest first
    pub ledger: Vec<Trade>,
}

impl MarketState {
    /// A state listing `tokens` with `balance` to spend
    pub fn new(tokens: Vec<Token>, balance: f64) -> Self {
        Self {
            tokens,
            balance,
            ..Default::default()
        }
    }

    /// Find a listed token
    pub fn token(&self, id: &RecordId) -> Option<&Token> {
        self.tokens.iter().find(|token| &token.id == id)
    }

    /// Units held of a token (0 if none)
    pub fn held(&self, id: &RecordId) -> f64 {
        self.holdings.get(id).copied().unwrap_or(0.0)
    }

    /// The value of all holdings at current listed prices
    pub fn portfolio_value(&self) -> f64 {
        self.holdings
            .iter()
            .map(|(id, units)| {
                self.token(id)
                    .and_then(|token| token.price.as_ref())
                    .map(|price| price.value() * units)
                    .unwrap_or(0.0)
            })
            .sum()
    }
}

/// Which way a trade went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Side {
    /// Units bought from the market
    Buy,
    /// Units sold to the market
    Sell,
}

/// One executed trade
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Trade {
    /// The traded token
    pub token: RecordId,
    /// Buy or sell
    pub side: Side,
    /// Units traded
    pub quantity: f64,
    /// The listed price at the time of the trade
    pub unit_price: f64,
}

impl Trade {
    /// Cash exchanged by the trade
    pub fn total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}
