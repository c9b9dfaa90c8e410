//! Image carousel plus the fullscreen overlay toggle.

use super::carousel::Carousel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryState {
    images: Carousel,
    fullscreen: bool,
}

impl GalleryState {
    pub fn new(image_count: usize) -> Self {
        Self {
            images: Carousel::new(image_count),
            fullscreen: false,
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.images.current()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn next(&mut self) {
        self.images.advance();
    }

    pub fn previous(&mut self) {
        self.images.retreat();
    }

    /// Shows `index` in the overlay. Out-of-range indices leave everything as is.
    pub fn open_fullscreen(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.jump_to(index);
            self.fullscreen = true;
        }
    }

    pub fn close_fullscreen(&mut self) {
        self.fullscreen = false;
    }
}
