#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod filter;
pub use filter::{Filter, TextQuery, matches_range, matches_selection, matches_text};

mod sort;
pub use sort::{Comparator, comparator};

mod summary;
pub use summary::summarize;

mod view;
pub use view::{derive_page, derive_view};
