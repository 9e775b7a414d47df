//! Offset/limit pagination with a server-side cap

use serde::Deserialize;

/// Hard ceiling on page size, applied regardless of what the caller asks for.
const MAX_LIMIT: i64 = 100;

/// Default page size when the caller doesn't say.
const DEFAULT_LIMIT: i64 = 100;

/// Pagination window for list queries.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    offset: i64,
    limit: i64,
}

impl Page {
    /// Create a window with validation.
    ///
    /// - Offset is clamped to a minimum of 0 (zero-based)
    /// - Limit is clamped to 1..=100
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset: offset.max(0),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for pagination (`?skip=&limit=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Self::new(params.skip.unwrap_or(0), params.limit.unwrap_or(DEFAULT_LIMIT))
    }
}
