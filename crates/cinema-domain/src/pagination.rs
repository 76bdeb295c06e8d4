//! Page requests, page normalization and paged results.

use serde::Serialize;

/// A 1-based page request against a listing with a fixed page size.
///
/// The page number is taken verbatim from the query string: anything that is
/// not a plain decimal number, and `"0"`, falls back to page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub per_page: u32,
    pub page: u32,
}

impl PageRequest {
    pub fn new(per_page: u32, raw_page: Option<&str>) -> Self {
        Self {
            per_page: per_page.max(1),
            page: parse_page(raw_page),
        }
    }

    /// Resolve the request against the number of matching rows.
    ///
    /// A page whose offset lands at or past `total` is silently reset to the
    /// first page instead of being clamped to the last one.
    pub fn resolve(self, total: u64) -> PageWindow {
        let per_page = u64::from(self.per_page.max(1));
        let page = self.page.max(1);
        let offset = u64::from(page - 1) * per_page;
        if offset >= total {
            return PageWindow {
                page: 1,
                offset: 0,
                limit: per_page,
            };
        }
        PageWindow {
            page,
            offset,
            limit: per_page,
        }
    }
}

/// Parse a raw page parameter. Missing, non-numeric or zero pages become 1.
pub fn parse_page(raw: Option<&str>) -> u32 {
    match raw {
        Some(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse::<u32>().ok().filter(|&p| p > 0).unwrap_or(1)
        }
        _ => 1,
    }
}

/// Number of pages needed for `total` rows.
pub fn page_count(total: u64, per_page: u32) -> u32 {
    let per_page = u64::from(per_page.max(1));
    u32::try_from(total.div_ceil(per_page)).unwrap_or(u32::MAX)
}

/// Offset/limit pair for a normalized page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub offset: u64,
    pub limit: u64,
}

/// One page of results plus the total number of matching rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_count: u32,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, window: PageWindow, total: u64) -> Self {
        Self {
            items,
            page: window.page,
            page_count: page_count(total, window.limit as u32),
            total,
        }
    }

    /// Result for a query that cannot match anything.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_count: 0,
            total: 0,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_count: self.page_count,
            total: self.total,
        }
    }
}
