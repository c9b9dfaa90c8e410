//! Platform-agnostic interaction state and helpers shared by the sections.

pub mod accordion;
pub mod carousel;
pub mod format;
pub mod forms;
pub mod gallery;
pub mod header;
pub mod pager;
pub mod platform;
pub mod selection;
pub mod ticker;
pub mod timing;

pub use accordion::Accordion;
pub use carousel::Carousel;
pub use forms::{FeedbackForm, NewsletterForm};
pub use gallery::GalleryState;
pub use header::HeaderState;
pub use pager::Pager;
pub use selection::MapSelection;
pub use ticker::Ticker;
