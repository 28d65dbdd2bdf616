// src/domain/gallery.rs

/// Two-up image gallery position. `active` is the index of the left image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairGallery {
    active: usize,
    len: usize,
}

impl PairGallery {
    pub fn new(len: usize, active: usize) -> Self {
        let mut gallery = Self { active: 0, len };
        gallery.select(active);
        gallery
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.len.saturating_sub(1))
    }

    pub fn select(&mut self, index: usize) {
        self.active = self.clamp(index);
    }

    pub fn left(&self) -> usize {
        self.active
    }

    /// Equals `left()` when there is only one image.
    pub fn right(&self) -> usize {
        self.clamp(self.active + 1)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        !self.is_empty() && (index == self.left() || index == self.right())
    }

    pub fn can_prev(&self) -> bool {
        self.active > 0
    }

    /// Only while a further pair exists to the right.
    pub fn can_next(&self) -> bool {
        self.active < self.len.saturating_sub(2)
    }

    pub fn next(&mut self) {
        if self.can_next() {
            self.active += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.can_prev() {
            self.active -= 1;
        }
    }

    pub fn total_dots(&self) -> usize {
        self.len.div_ceil(2).max(1)
    }

    pub fn active_dot(&self) -> usize {
        self.active / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_images() {
        let mut g = PairGallery::new(3, 0);
        assert_eq!((g.left(), g.right()), (0, 1));
        assert!(g.can_next());
        assert!(!g.can_prev());

        g.next();
        assert_eq!((g.left(), g.right()), (1, 2));
        assert!(!g.can_next());

        g.next();
        assert_eq!(g.left(), 1);
        assert_eq!(g.total_dots(), 2);
        assert_eq!(g.active_dot(), 0);
    }

    #[test]
    fn selecting_last_thumbnail_shows_single_image() {
        let g = PairGallery::new(4, 3);
        assert_eq!((g.left(), g.right()), (3, 3));
        assert!(!g.can_next());
        assert!(g.can_prev());
        assert_eq!(g.active_dot(), 1);
    }

    #[test]
    fn out_of_range_selection_is_clamped() {
        let g = PairGallery::new(10, 42);
        assert_eq!(g.left(), 9);
        assert_eq!(g.total_dots(), 5);
    }

    #[test]
    fn single_and_empty() {
        let one = PairGallery::new(1, 0);
        assert_eq!((one.left(), one.right()), (0, 0));
        assert!(!one.can_next());
        assert!(!one.can_prev());

        let none = PairGallery::new(0, 5);
        assert!(none.is_empty());
        assert_eq!(none.total_dots(), 1);
        assert!(!none.is_visible(0));
    }

    #[test]
    fn prev_walks_back_to_start() {
        let mut g = PairGallery::new(8, 5);
        for _ in 0..10 {
            g.prev();
        }
        assert_eq!(g.left(), 0);
    }
}
