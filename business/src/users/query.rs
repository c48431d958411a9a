//! Page query sent with every list request.

use std::fmt;

use crate::route::USERS_PATH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageQuery {
    page: u32,
    limit: u32,
}

impl PageQuery {
    /// `page` is 1-based. Both values are raised to at least 1.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// `/admin/users?page=<n>&limit=<m>`, relative to the API base.
    pub fn list_path(&self) -> String {
        format!("{USERS_PATH}?{self}")
    }
}

impl fmt::Display for PageQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page={}&limit={}", self.page, self.limit)
    }
}

/// Number of pages needed for `total_docs` records at `limit` per page.
pub fn total_pages(total_docs: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    u32::try_from(total_docs.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
}
