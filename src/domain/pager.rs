// src/domain/pager.rs

use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use crate::domain::viewport::{SizePolicy, Subscription, ViewportBus};

/// Number of pages needed for `item_count` items, never less than one.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1)).max(1)
}

/// Page cursor over a list of `item_count` items.
///
/// `page` is kept in `[0, total_pages() - 1]` after every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
    item_count: usize,
}

impl Pager {
    pub fn new(item_count: usize, page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            item_count,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.item_count, self.page_size)
    }

    fn clamp(&self, page: usize) -> usize {
        page.min(self.total_pages() - 1)
    }

    pub fn go_next(&mut self) {
        self.page = self.clamp(self.page.saturating_add(1));
    }

    pub fn go_prev(&mut self) {
        self.page = self.clamp(self.page.saturating_sub(1));
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = self.clamp(page);
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.page = self.clamp(self.page);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = self.clamp(self.page);
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    /// "01 of 05"
    pub fn page_label(&self) -> String {
        format!("{:02} of {:02}", self.page + 1, self.total_pages())
    }

    /// Index range of the visible items; shorter than `page_size` on the last page.
    pub fn range(&self) -> Range<usize> {
        let start = (self.page * self.page_size).min(self.item_count);
        let end = (start + self.page_size).min(self.item_count);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }
}

/// A section's pager wired to the request's viewport bus.
///
/// The page size follows the published width for as long as the carousel lives.
pub struct Carousel {
    pager: Rc<RefCell<Pager>>,
    _subscription: Subscription,
}

impl Carousel {
    pub fn attach(bus: &ViewportBus, item_count: usize, desktop: usize) -> Self {
        Self::attach_with(bus, item_count, SizePolicy::standard(desktop))
    }

    pub fn attach_with(bus: &ViewportBus, item_count: usize, policy: SizePolicy) -> Self {
        let pager = Rc::new(RefCell::new(Pager::new(item_count, policy.desktop())));
        let sink = Rc::clone(&pager);
        let subscription = bus.subscribe_with(policy, move |size| {
            sink.borrow_mut().set_page_size(size);
        });

        Self {
            pager,
            _subscription: subscription,
        }
    }

    /// Attach and move to the 1-based page taken from the URL, if any.
    pub fn at_page(bus: &ViewportBus, item_count: usize, desktop: usize, page: Option<usize>) -> Self {
        Self::at_page_with(bus, item_count, SizePolicy::standard(desktop), page)
    }

    pub fn at_page_with(
        bus: &ViewportBus,
        item_count: usize,
        policy: SizePolicy,
        page: Option<usize>,
    ) -> Self {
        let carousel = Self::attach_with(bus, item_count, policy);
        if let Some(page) = page {
            carousel.set_page(page.saturating_sub(1));
        }
        carousel
    }

    pub fn pager(&self) -> Pager {
        *self.pager.borrow()
    }

    pub fn set_page(&self, page: usize) {
        self.pager.borrow_mut().set_page(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 3), 1);
        assert_eq!(total_pages(1, 3), 1);
        assert_eq!(total_pages(3, 3), 1);
        assert_eq!(total_pages(4, 3), 2);
        assert_eq!(total_pages(10, 1), 10);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn total_pages_matches_ceiling_for_small_grid() {
        for p in 1..=6 {
            for n in 0..=40 {
                let expected = std::cmp::max(1, (n + p - 1) / p);
                assert_eq!(total_pages(n, p), expected, "n={n} p={p}");
            }
        }
    }

    #[test]
    fn navigation_never_leaves_bounds() {
        let mut pager = Pager::new(7, 3);
        let moves = [true, true, true, true, false, true, false, false, false, true];
        for forward in moves {
            if forward {
                pager.go_next();
            } else {
                pager.go_prev();
            }
            assert!(pager.page() < pager.total_pages());
        }
    }

    #[test]
    fn go_next_at_last_page_is_idempotent() {
        let mut pager = Pager::new(5, 2);
        pager.set_page(99);
        assert_eq!(pager.page(), 2);
        pager.go_next();
        pager.go_next();
        assert_eq!(pager.page(), 2);
        assert!(!pager.has_next());
        assert!(pager.has_prev());
    }

    #[test]
    fn go_prev_at_first_page_is_noop() {
        let mut pager = Pager::new(5, 2);
        pager.go_prev();
        assert_eq!(pager.page(), 0);
        assert!(!pager.has_prev());
    }

    #[test]
    fn slices_are_full_except_last() {
        let items: Vec<u32> = (0..8).collect();
        let mut pager = Pager::new(items.len(), 3);

        assert_eq!(pager.slice(&items), &[0, 1, 2]);
        pager.go_next();
        assert_eq!(pager.slice(&items), &[3, 4, 5]);
        pager.go_next();
        assert_eq!(pager.slice(&items), &[6, 7]);
        assert_eq!(
            pager.slice(&items).len(),
            items.len() - pager.page_size() * (pager.total_pages() - 1)
        );
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let items: [u8; 0] = [];
        let pager = Pager::new(0, 3);
        assert_eq!(pager.total_pages(), 1);
        assert!(pager.slice(&items).is_empty());
        assert_eq!(pager.page_label(), "01 of 01");
    }

    #[test]
    fn shrinking_the_list_reclamps() {
        let mut pager = Pager::new(9, 3);
        pager.set_page(2);
        pager.set_item_count(4);
        assert_eq!(pager.page(), 1);
        pager.set_page_size(10);
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn page_label_is_zero_padded() {
        let mut pager = Pager::new(15, 3);
        assert_eq!(pager.page_label(), "01 of 05");
        pager.set_page(4);
        assert_eq!(pager.page_label(), "05 of 05");

        let long = Pager::new(300, 3);
        assert_eq!(long.page_label(), "01 of 100");
    }

    #[test]
    fn carousel_follows_viewport() {
        let bus = ViewportBus::with_width(1280);
        let carousel = Carousel::at_page(&bus, 6, 3, Some(2));
        assert_eq!(carousel.pager().page_size(), 3);
        assert_eq!(carousel.pager().page(), 1);

        bus.publish(375);
        assert_eq!(carousel.pager().page_size(), 1);
        assert_eq!(carousel.pager().total_pages(), 6);
        assert_eq!(carousel.pager().page(), 1);

        bus.publish(1280);
        assert_eq!(carousel.pager().page(), 1);
    }

    #[test]
    fn carousel_with_small_only_policy_keeps_two_on_tablets() {
        let bus = ViewportBus::with_width(800);
        let clients = Carousel::at_page_with(&bus, 4, SizePolicy::small_only(2), Some(2));
        assert_eq!(clients.pager().page_size(), 2);
        assert_eq!(clients.pager().page_label(), "02 of 02");

        bus.publish(375);
        assert_eq!(clients.pager().page_size(), 1);
        assert_eq!(clients.pager().total_pages(), 4);
    }

    #[test]
    fn carousel_page_from_url_is_clamped() {
        let bus = ViewportBus::with_width(1280);
        let carousel = Carousel::at_page(&bus, 4, 3, Some(40));
        assert_eq!(carousel.pager().page(), 1);

        let first = Carousel::at_page(&bus, 4, 3, Some(0));
        assert_eq!(first.pager().page(), 0);
    }
}
