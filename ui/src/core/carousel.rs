//! Wrap-around index over a fixed-length list.

/// Position within a list of `len` entries.
///
/// The index always lies in `[0, len)`. With `len == 0` there is no current
/// entry and every move is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current index, or `None` for an empty list.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn retreat(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Moves straight to `index`; out-of-range targets are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_then_retreat_is_identity() {
        for len in 1..=7 {
            for start in 0..len {
                let mut c = Carousel::new(len);
                c.jump_to(start);

                c.advance();
                c.retreat();
                assert_eq!(c.current(), Some(start), "len={len} start={start}");

                c.retreat();
                c.advance();
                assert_eq!(c.current(), Some(start), "len={len} start={start}");
            }
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        let mut c = Carousel::new(6);
        c.retreat();
        assert_eq!(c.current(), Some(5));
        c.advance();
        assert_eq!(c.current(), Some(0));
    }

    #[test]
    fn single_entry_never_moves() {
        let mut c = Carousel::new(1);
        c.advance();
        assert_eq!(c.current(), Some(0));
        c.retreat();
        assert_eq!(c.current(), Some(0));
    }

    #[test]
    fn empty_list_is_inert() {
        let mut c = Carousel::new(0);
        assert!(c.is_empty());
        c.advance();
        c.retreat();
        c.jump_to(0);
        assert_eq!(c.current(), None);
    }

    #[test]
    fn jump_ignores_out_of_range() {
        let mut c = Carousel::new(3);
        c.jump_to(2);
        assert_eq!(c.current(), Some(2));
        c.jump_to(3);
        assert_eq!(c.current(), Some(2));
    }
}
