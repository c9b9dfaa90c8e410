//! Fixed-size pages over a list, with wrap-around page turns.

use super::carousel::Carousel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pages: Carousel,
    page_size: usize,
}

impl Pager {
    /// A `page_size` of zero yields no pages at all.
    pub fn new(item_count: usize, page_size: usize) -> Self {
        let total = if page_size == 0 {
            0
        } else {
            item_count.div_ceil(page_size)
        };
        Self {
            pages: Carousel::new(total),
            page_size,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    /// Current page, `0` when there are no pages.
    pub fn page(&self) -> usize {
        self.pages.current().unwrap_or(0)
    }

    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn next(&mut self) {
        self.pages.advance();
    }

    pub fn previous(&mut self) {
        self.pages.retreat();
    }

    /// Items on the current page. The last page may be short.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.pages.is_empty() {
            return &[];
        }
        let start = (self.page() * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_items_make_two_pages_of_four() {
        let items: Vec<usize> = (0..6).collect();
        let mut pager = Pager::new(items.len(), 4);
        assert_eq!(pager.total_pages(), 2);
        assert_eq!(pager.visible(&items), &[0, 1, 2, 3]);

        pager.next();
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.visible(&items), &[4, 5]);

        pager.next();
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn previous_from_first_page_wraps_to_last() {
        let mut pager = Pager::new(9, 4);
        pager.previous();
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn next_then_previous_returns_to_start() {
        for count in 1..=13 {
            let mut pager = Pager::new(count, 4);
            for _ in 0..pager.total_pages() {
                let start = pager.page();
                pager.next();
                pager.previous();
                assert_eq!(pager.page(), start, "count={count}");
                pager.next();
            }
        }
    }

    #[test]
    fn empty_feed_has_no_pages() {
        let items: Vec<u8> = Vec::new();
        let mut pager = Pager::new(0, 4);
        assert_eq!(pager.total_pages(), 0);
        pager.next();
        pager.previous();
        assert_eq!(pager.page(), 0);
        assert!(pager.visible(&items).is_empty());
        assert!(!pager.has_multiple_pages());
    }

    #[test]
    fn single_page_hides_controls() {
        let pager = Pager::new(4, 4);
        assert_eq!(pager.total_pages(), 1);
        assert!(!pager.has_multiple_pages());
    }

    #[test]
    fn zero_page_size_is_guarded() {
        let items = [1, 2, 3];
        let pager = Pager::new(items.len(), 0);
        assert_eq!(pager.total_pages(), 0);
        assert!(pager.visible(&items).is_empty());
    }
}
