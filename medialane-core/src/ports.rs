mod catalog;
mod listable;

pub use catalog::Catalog;
pub use listable::Listable;
