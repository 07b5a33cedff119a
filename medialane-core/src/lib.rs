#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Domain models for the MediaLane marketplace.
///
/// This module contains the records that appear in list views, the price
/// representation they share, and the transient filter criteria, pages and
/// summaries that views are derived from or into.
///
/// The models are plain data with minimal logic. Anything that interprets
/// them on behalf of a view lives behind the traits in [`ports`].
pub mod models;

/// Interface traits for the MediaLane list derivation.
///
/// These traits define the contract between the records, the derivation
/// engine and the collaborators that supply raw collections, without
/// specifying how any of those are implemented.
pub mod ports;
