use super::{LocalizedString, NewsletterCategory};

pub static NEWSLETTER_CATEGORIES: &[NewsletterCategory] = &[
    NewsletterCategory {
        id: "events",
        label: LocalizedString::new("Events", "Events"),
        description: LocalizedString::new(
            "Veranstaltungen, Termine, Aktionen im Quartier",
            "Events, dates, activities in the quarter",
        ),
    },
    NewsletterCategory {
        id: "offers",
        label: LocalizedString::new("Miet & Kaufangebote", "Rental & Purchase Offers"),
        description: LocalizedString::new(
            "Wohnungen, Stellplätze, Verkaufsobjekte",
            "Apartments, parking spaces, properties for sale",
        ),
    },
    NewsletterCategory {
        id: "notices",
        label: LocalizedString::new("Hinweise & Mitteilungen", "Notices & Announcements"),
        description: LocalizedString::new(
            "Informationen der Hausverwaltung, z. B. Reinigungen, Baustellen, Änderungen",
            "Property management information, e.g., cleaning, construction sites, changes",
        ),
    },
];
