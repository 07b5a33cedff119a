use clap::Args;
use medialane_core::models::{Criteria, PageRequest, RangeError, Selection, SortKey, TimeRange};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// The filter criteria, as command-line flags
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Free text matched against names, titles and creators
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Keep only this category, license type or payment direction ("all" keeps everything)
    #[arg(long, default_value = "all")]
    pub category: Selection,

    /// Keep only this status ("all" keeps everything)
    #[arg(long, default_value = "all")]
    pub status: Selection,

    /// price-high, price-low, recent, oldest or popularity (unknown keys sort by recency)
    #[arg(short, long)]
    pub sort: Option<SortKey>,

    /// Keep records created at or after this RFC 3339 instant
    #[arg(long, value_parser = parse_instant)]
    pub after: Option<OffsetDateTime>,

    /// Keep records created at or before this RFC 3339 instant
    #[arg(long, value_parser = parse_instant)]
    pub before: Option<OffsetDateTime>,
}

impl FilterArgs {
    /// Build the criteria, sorting by `default_sort` unless `--sort` was given
    pub fn criteria(&self, default_sort: SortKey) -> Result<Criteria, RangeError> {
        Ok(Criteria {
            query: self.query.clone(),
            category: self.category.clone(),
            status: self.status.clone(),
            sort: self.sort.unwrap_or(default_sort),
            range: TimeRange::new(self.after, self.before)?,
        })
    }
}

fn parse_instant(s: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(s, &Rfc3339)
}

/// Pagination flags
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// The 1-based page to print
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Records per page (0 or absent means the configured page size)
    #[arg(long)]
    pub per_page: Option<usize>,
}

impl PageArgs {
    pub fn request(&self, default_per_page: usize) -> PageRequest {
        let per_page = self.per_page.filter(|&n| n > 0).unwrap_or(default_per_page);
        PageRequest::new(self.page, per_page).normalized()
    }
}
