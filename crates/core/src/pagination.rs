//! Client-side pagination over a fetched collection.
//!
//! Pages are 1-based. Asking for a page past the end is not an error; it
//! yields an empty window.

use std::num::NonZeroUsize;

use serde::Serialize;

/// Records shown per page on the shipping-orders dashboard.
pub const PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).expect("page size is non-zero");

/// The items of `page` when `items` is split into pages of `page_size`.
///
/// The window is `[(page - 1) * page_size, page * page_size)` clamped to
/// `items.len()`.
#[must_use]
pub fn paginate<T>(items: &[T], page: NonZeroUsize, page_size: NonZeroUsize) -> &[T] {
    let start = (page.get() - 1).saturating_mul(page_size.get());
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size.get()).min(items.len());
    items.get(start..end).unwrap_or_default()
}

/// Number of pages needed for `total_items`; zero when there are none.
#[must_use]
pub const fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get())
}

/// Current-page state for a paginated list.
///
/// Moving forward is allowed while `current_page < total_pages`, moving back
/// while `current_page > 1`. Neither wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pager {
    current_page: NonZeroUsize,
    page_size: NonZeroUsize,
    total_items: usize,
}

impl Pager {
    /// A pager on page 1 with the dashboard page size.
    #[must_use]
    pub const fn new(total_items: usize) -> Self {
        Self::with_page_size(total_items, PAGE_SIZE)
    }

    #[must_use]
    pub const fn with_page_size(total_items: usize, page_size: NonZeroUsize) -> Self {
        Self {
            current_page: NonZeroUsize::MIN,
            page_size,
            total_items,
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> NonZeroUsize {
        self.current_page
    }

    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    #[must_use]
    pub const fn can_go_next(&self) -> bool {
        self.current_page.get() < self.total_pages()
    }

    #[must_use]
    pub const fn can_go_previous(&self) -> bool {
        self.current_page.get() > 1
    }

    /// Advance one page. Returns `false` and stays put on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        match self.current_page.checked_add(1) {
            Some(page) => {
                self.current_page = page;
                true
            }
            None => false,
        }
    }

    /// Go back one page. Returns `false` and stays put on page 1.
    pub fn previous_page(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        match NonZeroUsize::new(self.current_page.get() - 1) {
            Some(page) => {
                self.current_page = page;
                true
            }
            None => false,
        }
    }

    /// Jump straight to `page`. Pages past the end are allowed and show an
    /// empty window.
    pub const fn go_to(&mut self, page: NonZeroUsize) {
        self.current_page = page;
    }

    /// Record a new collection size after fresh data arrives. The current
    /// page is kept as is.
    pub const fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
    }

    /// The current page of `items`.
    #[must_use]
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.current_page, self.page_size)
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn page(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_paginate_23_items() {
        let items: Vec<usize> = (0..23).collect();

        assert_eq!(paginate(&items, page(1), PAGE_SIZE).len(), 10);
        assert_eq!(paginate(&items, page(2), PAGE_SIZE), &items[10..20]);
        assert_eq!(paginate(&items, page(3), PAGE_SIZE), &[20, 21, 22]);
        assert!(paginate(&items, page(4), PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_paginate_empty_and_huge_page() {
        let empty: [u8; 0] = [];
        assert!(paginate(&empty, page(1), PAGE_SIZE).is_empty());

        let items = [1, 2, 3];
        assert!(paginate(&items, page(usize::MAX), PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(10, PAGE_SIZE), 1);
        assert_eq!(total_pages(11, PAGE_SIZE), 2);
        assert_eq!(total_pages(23, PAGE_SIZE), 3);
    }

    #[test]
    fn test_no_orders_disables_both_transitions() {
        let mut pager = Pager::new(0);
        assert_eq!(pager.current_page().get(), 1);
        assert!(!pager.can_go_next());
        assert!(!pager.can_go_previous());
        assert!(!pager.next_page());
        assert!(!pager.previous_page());
        assert_eq!(pager.current_page().get(), 1);
    }

    #[test]
    fn test_walk_forward_and_back_without_wrapping() {
        let mut pager = Pager::new(23);
        assert!(!pager.can_go_previous());

        assert!(pager.next_page());
        assert!(pager.next_page());
        assert_eq!(pager.current_page().get(), 3);
        assert!(!pager.can_go_next());
        assert!(!pager.next_page());
        assert_eq!(pager.current_page().get(), 3);

        assert!(pager.previous_page());
        assert!(pager.previous_page());
        assert!(!pager.previous_page());
        assert_eq!(pager.current_page().get(), 1);
    }

    #[test]
    fn test_window_follows_current_page() {
        let items: Vec<usize> = (0..23).collect();
        let mut pager = Pager::new(items.len());
        pager.go_to(page(3));
        assert_eq!(pager.window(&items), &[20, 21, 22]);

        pager.go_to(page(5));
        assert!(pager.window(&items).is_empty());
        assert!(pager.can_go_previous());
        assert!(!pager.can_go_next());
    }

    #[test]
    fn test_set_total_items_keeps_page() {
        let mut pager = Pager::new(0);
        pager.set_total_items(15);
        assert!(pager.can_go_next());
        assert!(pager.next_page());
        assert_eq!(pager.current_page().get(), 2);
        assert_eq!(pager.total_pages(), 2);
    }
}
