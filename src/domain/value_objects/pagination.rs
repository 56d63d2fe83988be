//! Page/limit pagination.

use std::ops::Range;

/// A 1-based page of `limit` items.
///
/// Both values are clamped to at least 1 on construction, so the offset is
/// never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    limit: i64,
}

impl Pagination {
    pub const FIRST_PAGE: i64 = 1;

    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Number of items preceding this page: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Index range of this page within a sequence of `total` items, or `None`
    /// if the page starts at or past the end.
    pub fn window(&self, total: usize) -> Option<Range<usize>> {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        if start >= total {
            return None;
        }
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        Some(start..start.saturating_add(limit).min(total))
    }
}
