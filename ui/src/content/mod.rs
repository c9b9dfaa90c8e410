//! Hand-authored bilingual content for every section of the site.
//!
//! All records are `'static` and immutable; interaction state elsewhere only
//! ever refers to them by index or identifier.

use time::Date;

use crate::i18n::Lang;

mod buildings;
mod faq;
mod gallery;
mod nav;
mod news;
mod newsletter;
mod ticker;

pub use buildings::BUILDINGS;
pub use faq::FAQ_ITEMS;
pub use gallery::{GALLERY_IMAGES, HERO_IMAGE};
pub use nav::NAV_ITEMS;
pub use news::NEWS_ITEMS;
pub use newsletter::NEWSLETTER_CATEGORIES;
pub use ticker::TICKER_MESSAGES;

/// A display string authored in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedString {
    pub de: &'static str,
    pub en: &'static str,
}

impl LocalizedString {
    pub const fn new(de: &'static str, en: &'static str) -> Self {
        Self { de, en }
    }

    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::De => self.de,
            Lang::En => self.en,
        }
    }
}

/// An ordered list of strings (bullet facts) per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedStringList {
    pub de: &'static [&'static str],
    pub en: &'static [&'static str],
}

impl LocalizedStringList {
    pub const fn new(de: &'static [&'static str], en: &'static [&'static str]) -> Self {
        Self { de, en }
    }

    pub fn get(&self, lang: Lang) -> &'static [&'static str] {
        match lang {
            Lang::De => self.de,
            Lang::En => self.en,
        }
    }
}

/// In-page scroll targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Overview,
    News,
    Gallery,
    Rental,
    Faq,
    Newsletter,
}

impl Anchor {
    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Overview => "overview",
            Anchor::News => "news",
            Anchor::Gallery => "gallery",
            Anchor::Rental => "rental",
            Anchor::Faq => "faq",
            Anchor::Newsletter => "newsletter",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: LocalizedString,
    pub target: Anchor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsItem {
    pub id: &'static str,
    pub title: LocalizedString,
    /// Display only; feed order is authoring order.
    pub date: Date,
    pub teaser: LocalizedString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: LocalizedString,
    pub answer: LocalizedString,
}

/// Position on the map canvas, in percent of its width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Building {
    pub id: &'static str,
    pub name: LocalizedString,
    pub description: LocalizedString,
    pub status: LocalizedString,
    pub key_facts: LocalizedStringList,
    pub coordinates: MapPoint,
}

/// Finds a building by identifier; unknown identifiers resolve to `None`.
pub fn building_by_id(id: &str) -> Option<&'static Building> {
    BUILDINGS.iter().find(|b| b.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsletterCategory {
    pub id: &'static str,
    pub label: LocalizedString,
    pub description: LocalizedString,
}
