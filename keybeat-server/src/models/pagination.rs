//! Pagination over the newest-first session list
//!
//! Out-of-range input is never an error: a page below 1 becomes 1, a size
//! below 1 becomes the default, and a page past the end is pulled back to
//! the last page.

use serde::{Deserialize, Serialize};

use super::integer::deserialize_saturating_opt;

/// Page used when none is requested
pub const DEFAULT_PAGE: i64 = 1;

/// Items per page used when none (or a non-positive size) is requested
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Normalized pagination request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed, not yet clamped to the last page)
    pub page: u64,
    /// Items per page (always >= 1)
    pub size: u64,
}

impl Pagination {
    /// Normalize raw page/size values. Any i64 is accepted.
    pub fn new(page: i64, size: i64) -> Self {
        let page = if page < 1 { DEFAULT_PAGE } else { page };
        let size = if size < 1 { DEFAULT_PAGE_SIZE } else { size };

        // Both are positive here, so the casts are lossless.
        Self {
            page: page as u64,
            size: size as u64,
        }
    }

    /// Resolve the visible window for a list of `total` items.
    pub fn window(&self, total: u64) -> PageWindow {
        if total == 0 {
            return PageWindow {
                page: self.page,
                total_pages: 1,
                start: 0,
                end: 0,
            };
        }

        let total_pages = total.div_ceil(self.size);
        let page = self.page.min(total_pages);
        // page <= total_pages, so start < total and cannot overflow
        let start = (page - 1) * self.size;
        let end = start.saturating_add(self.size).min(total);

        PageWindow {
            page,
            total_pages,
            start,
            end,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

/// Page bounds resolved against a concrete item count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Page actually served
    pub page: u64,
    pub total_pages: u64,
    /// Zero-based start index (inclusive)
    pub start: u64,
    /// Zero-based end index (exclusive)
    pub end: u64,
}

/// Paginated response wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: u64,
    /// Current page number
    pub page: u64,
    /// Items per page
    pub page_size: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Check if there's a next page.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Check if there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Convert the item type, keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

/// Slice one page out of the full, already ordered record list.
///
/// Pure: the same input always yields the same page.
pub fn paginate<T>(all: Vec<T>, pagination: Pagination) -> Paginated<T> {
    let total = all.len() as u64;
    let window = pagination.window(total);

    // window bounds are <= total, which came from a usize
    let items = all
        .into_iter()
        .skip(window.start as usize)
        .take((window.end - window.start) as usize)
        .collect();

    Paginated {
        items,
        total,
        page: window.page,
        page_size: pagination.size,
        total_pages: window.total_pages,
    }
}

/// Query parameters for pagination
///
/// Integers beyond the i64 range clamp rather than fail; normalization
/// then treats them like any other out-of-range page or size.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default, deserialize_with = "deserialize_saturating_opt")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_saturating_opt")]
    pub size: Option<i64>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(
            params.page.unwrap_or(DEFAULT_PAGE),
            params.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ids n..=1, newest first
    fn newest_first(n: u64) -> Vec<u64> {
        (1..=n).rev().collect()
    }

    #[test]
    fn clamps_page() {
        assert_eq!(Pagination::new(0, 10).page, 1);
        assert_eq!(Pagination::new(-7, 10).page, 1);
        assert_eq!(Pagination::new(i64::MIN, 10).page, 1);
    }

    #[test]
    fn clamps_size_to_default() {
        assert_eq!(Pagination::new(1, 0).size, 10);
        assert_eq!(Pagination::new(1, -3).size, 10);
        assert_eq!(Pagination::new(1, 999).size, 999);
    }

    #[test]
    fn first_page_of_25() {
        let page = paginate(newest_first(25), Pagination::new(1, 10));
        assert_eq!(page.items, (16..=25).rev().collect::<Vec<_>>());
        assert_eq!(page.total, 25);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn last_page_is_short() {
        let page = paginate(newest_first(25), Pagination::new(3, 10));
        assert_eq!(page.items, vec![5, 4, 3, 2, 1]);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next());
        assert!(page.has_prev());
    }

    #[test]
    fn page_past_end_serves_last_page() {
        let clamped = paginate(newest_first(25), Pagination::new(99, 10));
        let last = paginate(newest_first(25), Pagination::new(3, 10));
        assert_eq!(clamped, last);
        assert_eq!(clamped.page, 3);
    }

    #[test]
    fn empty_store_reports_one_page() {
        let page = paginate(Vec::<u64>::new(), Pagination::new(5, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.page, 5);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn empty_store_ignores_requested_size() {
        let page = paginate(Vec::<u64>::new(), Pagination::new(-1, -1));
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn invalid_params_normalize() {
        let page = paginate(newest_first(5), Pagination::new(0, -3));
        assert_eq!(page.items, vec![5, 4, 3, 2, 1]);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn non_positive_page_matches_first_page() {
        for page in [0, -1, i64::MIN] {
            for size in [1, 3, 10, 50] {
                assert_eq!(
                    paginate(newest_first(12), Pagination::new(page, size)),
                    paginate(newest_first(12), Pagination::new(1, size)),
                );
            }
        }
    }

    #[test]
    fn huge_values_do_not_overflow() {
        let page = paginate(newest_first(3), Pagination::new(i64::MAX, i64::MAX));
        assert_eq!(page.items, vec![3, 2, 1]);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let page = paginate(newest_first(20), Pagination::new(2, 10));
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items, (1..=10).rev().collect::<Vec<_>>());
    }

    #[test]
    fn idempotent() {
        let a = paginate(newest_first(17), Pagination::new(2, 4));
        let b = paginate(newest_first(17), Pagination::new(2, 4));
        assert_eq!(a, b);
    }

    #[test]
    fn params_default_when_absent() {
        let p = Pagination::from(PaginationParams::default());
        assert_eq!(p, Pagination::new(1, 10));
    }

    #[test]
    fn map_keeps_metadata() {
        let page = paginate(newest_first(4), Pagination::new(1, 2)).map(|id| id * 10);
        assert_eq!(page.items, vec![40, 30]);
        assert_eq!(page.total, 4);
        assert_eq!(page.total_pages, 2);
    }
}
