use crate::{CliError, IOArgs};
use medialane_store::{Action, MarketState, Store};
use std::path::Path;
use tracing::{Level, event};

/// Apply the actions stored at `actions` to the market state read from the
/// input, and write the resulting state.
pub async fn replay(io: &IOArgs, actions: &Path) -> anyhow::Result<()> {
    let state: MarketState = serde_json::from_slice(&io.input.read_bytes().await?)?;
    let actions: Vec<Action> = serde_json::from_slice(&tokio::fs::read(actions).await?)?;
    let count = actions.len();

    let mut store = Store::new(state);
    store
        .dispatch_all(actions)
        .map_err(|(index, err)| CliError::Refused { index, err })?;
    let state = store.into_state();

    event!(
        Level::INFO,
        actions = count,
        balance = state.balance,
        "replayed session"
    );
    super::emit(&io.output, &state)
}
