mod asset;
mod campaign;
mod criteria;
mod license;
mod map;
mod page;
mod price;
mod record_id;
mod revenue;
mod summary;
mod token;

pub use asset::Asset;
pub use campaign::Campaign;
pub use criteria::{Criteria, RangeError, Selection, SortKey, TimeRange};
pub use license::License;
pub use map::Map;
pub use page::{PageRequest, ViewPage};
pub use price::Price;
pub use record_id::RecordId;
pub use revenue::RevenueRecord;
pub use summary::ViewSummary;
pub use token::Token;
