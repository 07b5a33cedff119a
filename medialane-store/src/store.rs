use crate::{Action, MarketState, StoreError, reduce};
use tracing::{Level, event};

/// The owner of a session's market state.
///
/// All changes go through [`Store::dispatch`], which runs the pure reducer and
/// only replaces the state when the action succeeds.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: MarketState,
}

impl Store {
    /// Take ownership of an initial state
    pub fn new(state: MarketState) -> Self {
        Self { state }
    }

    /// The current state
    pub fn state(&self) -> &MarketState {
        &self.state
    }

    /// Apply an action, returning the new state or the reason it was refused.
    pub fn dispatch(&mut self, action: Action) -> Result<&MarketState, StoreError> {
        match reduce(&self.state, &action) {
            Ok(next) => {
                event!(
                    Level::INFO,
                    action = action.name(),
                    balance = next.balance,
                    tokens = next.tokens.len(),
                    "applied market action"
                );
                self.state = next;
                Ok(&self.state)
            }
            Err(err) => {
                event!(
                    Level::WARN,
                    action = action.name(),
                    err = err.to_string(),
                    "refused market action"
                );
                Err(err)
            }
        }
    }

    /// Apply actions in order, stopping at the first refusal.
    ///
    /// On error the store keeps the state reached just before the refused
    /// action, and the error is paired with that action's index.
    pub fn dispatch_all(
        &mut self,
        actions: impl IntoIterator<Item = Action>,
    ) -> Result<&MarketState, (usize, StoreError)> {
        for (index, action) in actions.into_iter().enumerate() {
            self.dispatch(action).map_err(|err| (index, err))?;
        }
        Ok(&self.state)
    }

    /// Give up the store, keeping its state
    pub fn into_state(self) -> MarketState {
        self.state
    }
}
