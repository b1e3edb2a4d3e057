//! Paginator
//!
//! 1-based page slicing over an already filtered collection.

/// Current page and page size of one list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    items_per_page: usize,
}

impl PageState {
    /// A zero page size is bumped to 1
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Change page size; always lands back on page 1
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.current_page = 1;
    }

    /// Jump to `page`, clamped to `[1, total_pages]`
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    pub fn next(&mut self, total_pages: usize) {
        self.go_to(self.current_page.saturating_add(1), total_pages);
    }

    pub fn previous(&mut self, total_pages: usize) {
        self.go_to(self.current_page.saturating_sub(1), total_pages);
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, total_pages: usize) -> bool {
        self.current_page < total_pages
    }
}

/// `ceil(len / items_per_page)`; an empty collection has zero pages
pub fn total_pages(len: usize, items_per_page: usize) -> usize {
    len.div_ceil(items_per_page.max(1))
}

/// Visible slice for the page; empty when the page is past the end
pub fn paginate<T: Clone>(items: &[T], page: &PageState) -> Vec<T> {
    let start = (page.current_page - 1).saturating_mul(page.items_per_page);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page.items_per_page).min(items.len());
    items[start..end].to_vec()
}

/// "Showing 41–45 of 45"
pub fn page_range_label(len: usize, page: &PageState) -> String {
    let start = (page.current_page - 1).saturating_mul(page.items_per_page);
    if len == 0 || start >= len {
        return format!("Showing 0 of {}", len);
    }
    let end = start.saturating_add(page.items_per_page).min(len);
    format!("Showing {}–{} of {}", start + 1, end, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    fn at_page(page: usize, size: usize) -> PageState {
        let mut state = PageState::new(size);
        state.current_page = page;
        state
    }

    #[test]
    fn test_forty_five_items_twenty_per_page() {
        let items = numbered(45);
        assert_eq!(total_pages(items.len(), 20), 3);

        let first = paginate(&items, &at_page(1, 20));
        assert_eq!(first, numbered(20));

        let third = paginate(&items, &at_page(3, 20));
        assert_eq!(third, vec![41, 42, 43, 44, 45]);

        assert!(paginate(&items, &at_page(4, 20)).is_empty());
    }

    #[test]
    fn test_slice_length_formula() {
        for n in [0usize, 1, 19, 20, 21, 45, 100] {
            for size in [1usize, 7, 20] {
                for page in 1..=8usize {
                    let slice = paginate(&numbered(n), &at_page(page, size));
                    let expected = size.min(n.saturating_sub((page - 1) * size));
                    assert_eq!(slice.len(), expected, "n={} size={} page={}", n, size, page);
                }
            }
        }
    }

    #[test]
    fn test_empty_collection_has_zero_pages() {
        assert_eq!(total_pages(0, 20), 0);
        assert!(paginate::<usize>(&[], &PageState::new(20)).is_empty());
        assert_eq!(page_range_label(0, &PageState::new(20)), "Showing 0 of 0");
    }

    #[test]
    fn test_paginate_is_pure() {
        let items = numbered(45);
        let page = at_page(2, 20);
        assert_eq!(paginate(&items, &page), paginate(&items, &page));
    }

    #[test]
    fn test_changing_page_size_resets_to_first_page() {
        let mut page = at_page(3, 20);
        page.set_items_per_page(50);
        assert_eq!(page.current_page(), 1);
        assert_eq!(page.items_per_page(), 50);

        page.set_items_per_page(0);
        assert_eq!(page.items_per_page(), 1);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut page = PageState::new(20);
        page.previous(3);
        assert_eq!(page.current_page(), 1);
        page.next(3);
        page.next(3);
        page.next(3);
        assert_eq!(page.current_page(), 3);
        assert!(!page.has_next(3));
        assert!(page.has_previous());
        page.go_to(10, 0);
        assert_eq!(page.current_page(), 1);
    }

    #[test]
    fn test_range_label() {
        assert_eq!(page_range_label(45, &at_page(3, 20)), "Showing 41–45 of 45");
        assert_eq!(page_range_label(45, &at_page(1, 20)), "Showing 1–20 of 45");
        assert_eq!(page_range_label(45, &at_page(4, 20)), "Showing 0 of 45");
    }

    #[test]
    fn test_extreme_page_values_do_not_overflow() {
        let items = numbered(3);
        assert_eq!(paginate(&items, &at_page(1, usize::MAX)), items);
        assert!(paginate(&items, &at_page(usize::MAX, 2)).is_empty());
        assert_eq!(page_range_label(3, &at_page(1, usize::MAX)), "Showing 1–3 of 3");
        assert_eq!(page_range_label(3, &at_page(usize::MAX, usize::MAX)), "Showing 0 of 3");
    }
}
