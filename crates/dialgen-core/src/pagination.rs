//! Fixed-size pagination over ordered lists
//!
//! A [`Pager`] only stores the page size and the current page; the list
//! length is passed in on every call so the page index can be clamped
//! against whatever the list currently holds.

/// Countries shown per picker page.
pub const COUNTRY_PAGE_SIZE: usize = 30;

/// Numbers shown per result page.
pub const RESULT_PAGE_SIZE: usize = 50;

/// Number of pages needed for `len` items, `ceil(len / page_size)`.
pub fn page_count(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size)
}

/// Split a list into consecutive pages.
pub fn paginate<T>(items: &[T], page_size: usize) -> Vec<&[T]> {
    items.chunks(page_size.max(1)).collect()
}

/// Current page cursor for one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    page: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current page index (0-based).
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self, len: usize) -> usize {
        page_count(len, self.page_size)
    }

    /// Index of the last valid page; 0 for an empty list.
    pub fn last_page(&self, len: usize) -> usize {
        self.total_pages(len).saturating_sub(1)
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Jump to `page`, clamped to `[0, last_page]`.
    pub fn set_page(&mut self, page: usize, len: usize) {
        self.page = page.min(self.last_page(len));
    }

    /// Pull the cursor back inside the list after it shrank.
    pub fn clamp(&mut self, len: usize) {
        self.set_page(self.page, len);
    }

    /// Advance one page; returns whether the page changed.
    pub fn next(&mut self, len: usize) -> bool {
        let before = self.page;
        self.set_page(self.page.saturating_add(1), len);
        self.page != before
    }

    /// Go back one page; returns whether the page changed.
    pub fn prev(&mut self) -> bool {
        let before = self.page;
        self.page = self.page.saturating_sub(1);
        self.page != before
    }

    pub fn first(&mut self) {
        self.page = 0;
    }

    pub fn last(&mut self, len: usize) {
        self.page = self.last_page(len);
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.page < self.last_page(len)
    }

    /// Range of global indices on the current page.
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let start = (self.page * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    /// Items on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    /// Global index of a page-local position.
    pub fn global_index(&self, local: usize) -> usize {
        self.page * self.page_size + local
    }

    /// Number of items on the current page.
    pub fn items_on_page(&self, len: usize) -> usize {
        self.range(len).len()
    }

    /// "page x/y" style label values (1-based page, total pages).
    pub fn position(&self, len: usize) -> (usize, usize) {
        (self.page + 1, self.total_pages(len).max(1))
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(RESULT_PAGE_SIZE)
    }
}
