mod faq;
mod footer;
mod gallery;
mod hero;
mod map;
mod news;
mod site;

pub use faq::FaqSection;
pub use footer::SiteFooter;
pub use gallery::GallerySection;
pub use hero::Hero;
pub use map::InteractiveMap;
pub use news::{NewsSection, NEWS_PAGE_SIZE};
pub use site::Site;
