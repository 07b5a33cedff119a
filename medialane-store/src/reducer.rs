use crate::{Action, MarketState, Side, Trade};
use medialane_core::models::{Price, RecordId, Token};
use thiserror::Error;

/// Holdings at or below this many units are treated as fully sold
const DUST: f64 = 1e-9;

/// The reasons an action can be refused
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// The action names a token that is not listed
    #[error("unknown token {0}")]
    UnknownToken(RecordId),
    /// A token with this id is already listed
    #[error("token {0} is already listed")]
    DuplicateToken(RecordId),
    /// Quantities must be finite and positive
    #[error("invalid quantity {0}")]
    InvalidQuantity(f64),
    /// Deposits and sale proceeds must be positive and keep the balance finite
    #[error("invalid amount {0}")]
    InvalidAmount(f64),
    /// Listed prices must read as a positive number
    #[error("invalid price {0:?}")]
    InvalidPrice(String),
    /// The balance does not cover the purchase
    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance {
        /// The cost of the purchase
        needed: f64,
        /// The balance before the purchase
        available: f64,
    },
    /// Fewer units are held than the sale asks for
    #[error("insufficient holdings of {id}: selling {requested}, holding {held}")]
    InsufficientHoldings {
        /// The token being sold
        id: RecordId,
        /// Units to sell
        requested: f64,
        /// Units held
        held: f64,
    },
    /// A held token cannot be delisted
    #[error("token {0} is still held")]
    StillHeld(RecordId),
}

/// Compute the state that follows `action`.
///
/// The input state is left untouched. On error, no partial change escapes:
/// the caller still holds the previous state.
pub fn reduce(state: &MarketState, action: &Action) -> Result<MarketState, StoreError> {
    let mut next = state.clone();

    match action {
        Action::List { token } => {
            if next.token(&token.id).is_some() {
                return Err(StoreError::DuplicateToken(token.id.clone()));
            }
            unit_price(token)?;
            next.tokens.push(token.clone());
        }

        Action::Delist { id } => {
            let index = position(&next, id)?;
            if next.held(id) > 0.0 {
                return Err(StoreError::StillHeld(id.clone()));
            }
            next.tokens.remove(index);
        }

        Action::Reprice { id, price } => {
            let index = position(&next, id)?;
            if price.value() <= 0.0 {
                return Err(StoreError::InvalidPrice(price.amount.clone()));
            }
            next.tokens[index].price = Some(price.clone());
        }

        Action::Buy { id, quantity } => {
            let quantity = valid_quantity(*quantity)?;
            let index = position(&next, id)?;
            let unit_price = unit_price(&next.tokens[index])?;
            let needed = quantity * unit_price;
            if needed > next.balance {
                return Err(StoreError::InsufficientBalance {
                    needed,
                    available: next.balance,
                });
            }

            let held = next.held(id);
            if !(held + quantity).is_finite() {
                return Err(StoreError::InvalidQuantity(quantity));
            }
            if held <= 0.0 {
                let token = &mut next.tokens[index];
                token.holders = Some(token.holders.unwrap_or(0).saturating_add(1));
            }
            next.balance -= needed;
            next.holdings.insert(id.clone(), held + quantity);
            next.ledger.push(Trade {
                token: id.clone(),
                side: Side::Buy,
                quantity,
                unit_price,
            });
        }

        Action::Sell { id, quantity } => {
            let quantity = valid_quantity(*quantity)?;
            let index = position(&next, id)?;
            let held = next.held(id);
            if quantity > held + DUST {
                return Err(StoreError::InsufficientHoldings {
                    id: id.clone(),
                    requested: quantity,
                    held,
                });
            }
            let unit_price = unit_price(&next.tokens[index])?;
            let proceeds = quantity * unit_price;
            if !(next.balance + proceeds).is_finite() {
                return Err(StoreError::InvalidAmount(proceeds));
            }

            let remaining = held - quantity;
            if remaining <= DUST {
                next.holdings.shift_remove(id);
                let token = &mut next.tokens[index];
                token.holders = Some(token.holders.unwrap_or(0).saturating_sub(1));
            } else {
                next.holdings.insert(id.clone(), remaining);
            }
            next.balance += proceeds;
            next.ledger.push(Trade {
                token: id.clone(),
                side: Side::Sell,
                quantity,
                unit_price,
            });
        }

        Action::Deposit { amount } => {
            if !amount.is_finite() || *amount <= 0.0 || !(next.balance + amount).is_finite() {
                return Err(StoreError::InvalidAmount(*amount));
            }
            next.balance += amount;
        }
    }

    Ok(next)
}

fn position(state: &MarketState, id: &RecordId) -> Result<usize, StoreError> {
    state
        .tokens
        .iter()
        .position(|token| &token.id == id)
        .ok_or_else(|| StoreError::UnknownToken(id.clone()))
}

fn valid_quantity(quantity: f64) -> Result<f64, StoreError> {
    if quantity.is_finite() && quantity > 0.0 {
        Ok(quantity)
    } else {
        Err(StoreError::InvalidQuantity(quantity))
    }
}

// Tokens loaded straight into a state skip the listing check, so trades check again.
fn unit_price(token: &Token) -> Result<f64, StoreError> {
    let value = token.price.as_ref().map(Price::value).unwrap_or(0.0);
    if value > 0.0 {
        Ok(value)
    } else {
        Err(StoreError::InvalidPrice(
            token
                .price
                .as_ref()
                .map(|price| price.amount.clone())
                .unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market() -> MarketState {
        MarketState::new(vec![Token::new(1, "Orbit Shares", Price::new("2", "STRK"))], 10.0)
    }

    #[test]
    fn reducing_leaves_the_input_untouched() {
        let state = market();
        let next = reduce(&state, &Action::Deposit { amount: 5.0 }).unwrap();
        assert_eq!(state.balance, 10.0);
        assert_eq!(next.balance, 15.0);
    }

    #[test]
    fn quantities_must_be_positive_and_finite() {
        let state = market();
        for quantity in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = reduce(&state, &Action::Buy { id: 1.into(), quantity }).unwrap_err();
            assert!(matches!(err, StoreError::InvalidQuantity(_)));
        }
    }

    #[test]
    fn unpriced_tokens_cannot_trade() {
        let mut state = market();
        state.tokens[0].price = Some(Price::new("tbd", "STRK"));
        let err = reduce(&state, &Action::Buy { id: 1.into(), quantity: 1.0 }).unwrap_err();
        assert_eq!(err, StoreError::InvalidPrice("tbd".into()));
    }

    #[test]
    fn balances_never_overflow() {
        let state = MarketState::new(market().tokens, f64::MAX);
        let err = reduce(&state, &Action::Deposit { amount: f64::MAX }).unwrap_err();
        assert_eq!(err, StoreError::InvalidAmount(f64::MAX));
    }

    #[test]
    fn sale_proceeds_never_overflow() {
        let mut state = MarketState::new(market().tokens, f64::MAX);
        state.tokens[0].price = Some(Price::new("1e308", "STRK"));
        state.holdings.insert(1.into(), 10.0);
        let err = reduce(&state, &Action::Sell { id: 1.into(), quantity: 10.0 }).unwrap_err();
        assert!(matches!(err, StoreError::InvalidAmount(_)));
        assert_eq!(state.held(&1.into()), 10.0);
    }

    #[test]
    fn holdings_never_overflow() {
        let mut state = MarketState::new(market().tokens, 1e10);
        state.tokens[0].price = Some(Price::new("1e-300", "STRK"));
        state.holdings.insert(1.into(), f64::MAX);
        let err = reduce(&state, &Action::Buy { id: 1.into(), quantity: f64::MAX }).unwrap_err();
        assert_eq!(err, StoreError::InvalidQuantity(f64::MAX));
    }
}
