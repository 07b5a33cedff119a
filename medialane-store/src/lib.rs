#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod action;
pub use action::Action;

mod reducer;
pub use reducer::{StoreError, reduce};

mod state;
pub use state::{MarketState, Side, Trade};

mod store;
pub use store::Store;
