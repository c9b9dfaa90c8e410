//! Auto-advancing message ticker.

use super::carousel::Carousel;

/// Delay between two ticker messages.
pub const TICKER_INTERVAL_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    messages: Carousel,
}

impl Ticker {
    pub fn new(message_count: usize) -> Self {
        Self {
            messages: Carousel::new(message_count),
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.messages.current()
    }

    /// One timer tick.
    pub fn advance(&mut self) {
        self.messages.advance();
    }
}
