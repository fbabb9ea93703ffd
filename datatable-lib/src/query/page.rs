//! Page slicing and the page-number navigation model.

use std::ops::Range;

use serde::Serialize;

/// Number of pages shown on each side of the current page in the window.
pub const PAGE_WINDOW_RADIUS: usize = 2;

/// How many rows make up one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    /// At most this many rows per page. Must be at least 1.
    Fixed(usize),
    /// Everything on a single page.
    Unbounded,
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Fixed(3)
    }
}

/// One entry of the page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "page")]
pub enum PageToken {
    /// A navigable page number (1-based).
    Page(usize),
    /// A gap of elided pages. Not navigable.
    Ellipsis,
}

impl PageToken {
    /// Returns the page number if this token is navigable.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::Page(n) => Some(*n),
            PageToken::Ellipsis => None,
        }
    }
}

/// Slices a row list into pages.
///
/// The paginator never adjusts the page it is given; callers normalize the
/// current page with [`Paginator::normalize_page`] before slicing. Slicing an
/// out-of-range page yields an empty slice rather than panicking.
///
/// # Example
///
/// ```
/// use datatable_lib::query::{PageSize, Paginator};
///
/// let paginator = Paginator::new(PageSize::Fixed(2));
/// let rows = [1, 2, 3, 4, 5];
/// assert_eq!(paginator.total_pages(rows.len()), 3);
/// assert_eq!(paginator.page(&rows, 3), &[5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paginator {
    page_size: PageSize,
}

impl Paginator {
    /// Creates a paginator with the given page size.
    pub fn new(page_size: PageSize) -> Self {
        Self { page_size }
    }

    /// Returns the page size.
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Number of pages needed for `len` rows. Never less than 1.
    pub fn total_pages(&self, len: usize) -> usize {
        match self.page_size {
            PageSize::Fixed(size) if size > 0 => len.div_ceil(size).max(1),
            _ => 1,
        }
    }

    /// Returns `page` if it lies in `1..=total_pages(len)`, otherwise 1.
    pub fn normalize_page(&self, len: usize, page: usize) -> usize {
        if (1..=self.total_pages(len)).contains(&page) {
            page
        } else {
            1
        }
    }

    /// Index range of `page` within `len` rows, clamped to bounds.
    pub fn range(&self, len: usize, page: usize) -> Range<usize> {
        let index = page.saturating_sub(1);
        match self.page_size {
            PageSize::Fixed(size) if size > 0 => {
                let start = size.saturating_mul(index).min(len);
                let end = start.saturating_add(size).min(len);
                start..end
            }
            _ if index == 0 => 0..len,
            _ => len..len,
        }
    }

    /// Rows on `page`.
    pub fn page<'a, T>(&self, rows: &'a [T], page: usize) -> &'a [T] {
        &rows[self.range(rows.len(), page)]
    }
}

/// Builds the page window for navigation.
///
/// Shows up to [`PAGE_WINDOW_RADIUS`] pages on each side of `current`, always
/// keeps the first and last page reachable, and collapses larger gaps into a
/// single [`PageToken::Ellipsis`]. With a single page there is nothing to
/// navigate, so the window is empty.
///
/// # Example
///
/// ```
/// use datatable_lib::query::{page_window, PageToken::{Ellipsis, Page}};
///
/// assert_eq!(
///     page_window(10, 5),
///     vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]
/// );
/// ```
pub fn page_window(total_pages: usize, current: usize) -> Vec<PageToken> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let start = current.saturating_sub(PAGE_WINDOW_RADIUS).max(1);
    let end = current.saturating_add(PAGE_WINDOW_RADIUS).min(total_pages);

    let mut tokens = Vec::with_capacity(end.saturating_sub(start) + 5);

    // Leading compression
    if start > 2 {
        tokens.push(PageToken::Page(1));
        tokens.push(PageToken::Ellipsis);
    } else if start == 2 {
        tokens.push(PageToken::Page(1));
    }

    tokens.extend((start..=end).map(PageToken::Page));

    // Trailing compression
    if end + 1 < total_pages {
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
    } else if end < total_pages {
        tokens.push(PageToken::Page(total_pages));
    }

    log::trace!(
        "[page] window for {}/{}: {:?}",
        current,
        total_pages,
        tokens
    );

    tokens
}

#[cfg(test)]
mod tests {
    use super::PageToken::Ellipsis;
    use super::PageToken::Page;
    use super::*;

    #[test]
    fn test_total_pages() {
        let paginator = Paginator::new(PageSize::Fixed(3));
        assert_eq!(paginator.total_pages(0), 1);
        assert_eq!(paginator.total_pages(3), 1);
        assert_eq!(paginator.total_pages(4), 2);
        assert_eq!(paginator.total_pages(9), 3);
    }

    #[test]
    fn test_total_pages_unbounded() {
        let paginator = Paginator::new(PageSize::Unbounded);
        assert_eq!(paginator.total_pages(0), 1);
        assert_eq!(paginator.total_pages(1000), 1);
    }

    #[test]
    fn test_page_slices() {
        let paginator = Paginator::new(PageSize::Fixed(2));
        let rows = [1, 2, 3, 4, 5];
        assert_eq!(paginator.page(&rows, 1), &[1, 2]);
        assert_eq!(paginator.page(&rows, 2), &[3, 4]);
        assert_eq!(paginator.page(&rows, 3), &[5]);
    }

    #[test]
    fn test_page_out_of_range_is_empty() {
        let paginator = Paginator::new(PageSize::Fixed(2));
        let rows = [1, 2, 3];
        assert!(paginator.page(&rows, 5).is_empty());
        assert_eq!(paginator.range(3, usize::MAX), 3..3);
    }

    #[test]
    fn test_unbounded_single_page() {
        let paginator = Paginator::new(PageSize::Unbounded);
        let rows = [1, 2, 3];
        assert_eq!(paginator.page(&rows, 1), &[1, 2, 3]);
        assert!(paginator.page(&rows, 2).is_empty());
    }

    #[test]
    fn test_pages_cover_rows_exactly_once() {
        let rows: Vec<usize> = (0..17).collect();
        for size in 1..=6 {
            let paginator = Paginator::new(PageSize::Fixed(size));
            let total = paginator.total_pages(rows.len());
            let joined: Vec<usize> = (1..=total)
                .flat_map(|p| paginator.page(&rows, p).iter().copied())
                .collect();
            assert_eq!(joined, rows, "page size {}", size);
        }
    }

    #[test]
    fn test_normalize_page() {
        let paginator = Paginator::new(PageSize::Fixed(3));
        assert_eq!(paginator.normalize_page(7, 0), 1);
        assert_eq!(paginator.normalize_page(7, 2), 2);
        assert_eq!(paginator.normalize_page(7, 3), 3);
        assert_eq!(paginator.normalize_page(7, 9), 1);
        assert_eq!(paginator.normalize_page(0, 4), 1);
        assert_eq!(Paginator::new(PageSize::Unbounded).normalize_page(50, 2), 1);
    }

    #[test]
    fn test_window_start() {
        assert_eq!(page_window(10, 1), vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]);
    }

    #[test]
    fn test_window_middle() {
        assert_eq!(
            page_window(10, 5),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_window_end() {
        assert_eq!(page_window(10, 10), vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]);
    }

    #[test]
    fn test_window_no_ellipsis_when_adjacent() {
        // Window starts at 2 and ends one short of the last page.
        assert_eq!(
            page_window(7, 4),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
    }

    #[test]
    fn test_window_spans_everything() {
        assert_eq!(page_window(3, 2), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_window_single_page() {
        assert!(page_window(1, 1).is_empty());
        assert!(page_window(0, 1).is_empty());
    }

    #[test]
    fn test_token_page() {
        assert_eq!(Page(4).page(), Some(4));
        assert_eq!(Ellipsis.page(), None);
    }
}
