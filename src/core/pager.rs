//! # Pagination
//!
//! Page arithmetic for the list screen. Pages are 1-based and always hold
//! [`PAGE_SIZE`] entries, except the last one.

/// Entries requested per list fetch.
pub const PAGE_SIZE: u32 = 20;

/// The `limit`/`offset` pair sent to the collection endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u32,
    pub limit: u32,
}

/// Window for a 1-based page number. Page 0 is treated as page 1.
pub fn window_for(page: u32) -> PageWindow {
    PageWindow {
        offset: page.saturating_sub(1) * PAGE_SIZE,
        limit: PAGE_SIZE,
    }
}

/// ceil(count / PAGE_SIZE)
pub fn total_pages(count: u32) -> u32 {
    count.div_ceil(PAGE_SIZE)
}

pub fn can_go_previous(page: u32) -> bool {
    page > 1
}

/// Next is disabled on the last page. An empty catalog (zero pages) has no next page either.
pub fn can_go_next(page: u32, total_pages: u32) -> bool {
    page < total_pages
}
