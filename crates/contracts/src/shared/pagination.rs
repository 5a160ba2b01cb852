use std::ops::Range;

/// Countries per listing page.
pub const PAGE_SIZE: usize = 12;

/// One entry of the page-link strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// 1-based page cursor over a result set of `total_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Pagination {
    pub fn new(total_items: usize) -> Self {
        Self::with_page_size(total_items, PAGE_SIZE)
    }

    pub fn with_page_size(total_items: usize, page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    fn last_reachable(&self) -> usize {
        self.total_pages().max(1)
    }

    /// New result set: back to page 1.
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    /// Moves to `page`, clamped to `[1, max(1, total_pages)]`. Returns whether
    /// the cursor moved.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = page.clamp(1, self.last_reachable());
        if target == self.current_page {
            return false;
        }
        self.current_page = target;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current_page + 1)
    }

    pub fn previous(&mut self) -> bool {
        self.go_to(self.current_page.saturating_sub(1))
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Index range of the current page within the result set.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(self.total_items);
        let end = (self.current_page * self.page_size).min(self.total_items);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    /// First and last page, the current page with its neighbours, and an
    /// ellipsis for each hidden run.
    pub fn links(&self) -> Vec<PageLink> {
        let total = self.total_pages();
        let current = self.current_page;
        let mut links = Vec::new();

        for number in 1..=total {
            let in_window = number + 1 >= current && number <= current + 1;
            if number == 1 || number == total || in_window {
                links.push(PageLink::Page {
                    number,
                    active: number == current,
                });
            } else if (number + 2 == current && current > 3)
                || (number == current + 2 && current + 2 < total)
            {
                links.push(PageLink::Ellipsis);
            }
        }
        links
    }
}
