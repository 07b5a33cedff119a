/// A request for one page of a derived view. Pages are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PageRequest {
    /// The 1-based page number (0 is read as 1)
    pub page: usize,
    /// The page size (0 is read as [`PageRequest::DEFAULT_PER_PAGE`])
    pub per_page: usize,
}

impl PageRequest {
    /// The page size used when none is given
    pub const DEFAULT_PER_PAGE: usize = 12;

    /// Request page `page` with `per_page` records per page
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// Replace zero values by their defaults
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: if self.per_page == 0 {
                Self::DEFAULT_PER_PAGE
            } else {
                self.per_page
            },
        }
    }

    /// The index of the first record on this page
    pub fn offset(&self) -> usize {
        let Self { page, per_page } = self.normalized();
        (page - 1).saturating_mul(per_page)
    }

    /// The request for the page after this one
    pub fn next(&self) -> Self {
        let normal = self.normalized();
        Self {
            page: normal.page.saturating_add(1),
            per_page: normal.per_page,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }
}

/// One page of a derived view
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewPage<T> {
    /// The records on this page, in view order
    pub results: Vec<T>,
    /// How many records the whole view holds
    pub total: usize,
    /// The request for the following page, if there is one
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub more: Option<PageRequest>,
}
