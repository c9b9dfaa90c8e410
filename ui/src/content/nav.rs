use super::{Anchor, LocalizedString, NavItem};

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: LocalizedString::new("Übersicht", "Overview"),
        target: Anchor::Overview,
    },
    NavItem {
        label: LocalizedString::new("News & Events", "News & Events"),
        target: Anchor::News,
    },
    NavItem {
        label: LocalizedString::new("Galerie", "Gallery"),
        target: Anchor::Gallery,
    },
    NavItem {
        label: LocalizedString::new("Mieten & Kaufen", "Rental & Sales"),
        target: Anchor::Rental,
    },
    NavItem {
        label: LocalizedString::new("FAQ", "FAQ"),
        target: Anchor::Faq,
    },
];
