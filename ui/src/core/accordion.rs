//! At-most-one-open disclosure list.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
    len: usize,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opens `index`, closing whichever entry was open before.
    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.open = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Strict toggle: the open entry closes, any other entry opens.
    pub fn toggle(&mut self, index: usize) {
        if self.is_open(index) {
            self.close();
        } else {
            self.open(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(Accordion::new(5).open_index(), None);
    }

    #[test]
    fn toggling_twice_restores_state() {
        for i in 0..5 {
            let mut acc = Accordion::new(5);
            acc.toggle(i);
            assert_eq!(acc.open_index(), Some(i));
            acc.toggle(i);
            assert_eq!(acc.open_index(), None);

            acc.open(i);
            acc.toggle(i);
            acc.toggle(i);
            assert_eq!(acc.open_index(), Some(i));
        }
    }

    #[test]
    fn opening_another_entry_closes_the_first() {
        let mut acc = Accordion::new(3);
        acc.toggle(0);
        acc.toggle(2);
        assert!(!acc.is_open(0));
        assert!(acc.is_open(2));
        assert_eq!(acc.open_index(), Some(2));
    }

    #[test]
    fn clicking_the_open_entry_closes_it() {
        let mut acc = Accordion::new(3);
        acc.toggle(1);
        acc.toggle(1);
        assert_eq!(acc.open_index(), None);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut acc = Accordion::new(2);
        acc.toggle(1);
        acc.toggle(7);
        assert_eq!(acc.open_index(), Some(1));
    }
}
