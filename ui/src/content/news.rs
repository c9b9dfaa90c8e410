use time::macros::date;

use super::{LocalizedString, NewsItem};

/// Newest-last, in the order the editors wrote them.
pub static NEWS_ITEMS: &[NewsItem] = &[
    NewsItem {
        id: "1",
        title: LocalizedString::new(
            "Baufortschritt: Neue Wohnungen im Block A",
            "Construction Progress: New Apartments in Block A",
        ),
        date: date!(2024 - 03 - 15),
        teaser: LocalizedString::new(
            "Die Arbeiten am Block A schreiten planmäßig voran. Die ersten Wohnungen werden voraussichtlich im Sommer 2024 bezugsfertig sein.",
            "Work on Block A is progressing as planned. The first apartments are expected to be ready for occupancy in summer 2024.",
        ),
    },
    NewsItem {
        id: "2",
        title: LocalizedString::new(
            "Nachbarschaftsfest im Steingauquartier",
            "Neighborhood Festival in Steingauquartier",
        ),
        date: date!(2024 - 04 - 20),
        teaser: LocalizedString::new(
            "Lernen Sie Ihre zukünftigen Nachbarn kennen! Mit Musik, Essen und Getränken feiern wir das Gemeinschaftsgefühl.",
            "Meet your future neighbors! We celebrate community spirit with music, food, and drinks.",
        ),
    },
    NewsItem {
        id: "3",
        title: LocalizedString::new(
            "Neue E-Ladestationen in der Tiefgarage",
            "New EV Charging Stations in Underground Parking",
        ),
        date: date!(2024 - 05 - 01),
        teaser: LocalizedString::new(
            "Ab Mai stehen in der Tiefgarage 10 neue Ladestationen für Elektrofahrzeuge zur Verfügung.",
            "10 new charging stations for electric vehicles will be available in the underground parking from May.",
        ),
    },
    NewsItem {
        id: "4",
        title: LocalizedString::new(
            "Tag der offenen Tür: Musterwohnung Block B",
            "Open House: Show Apartment Block B",
        ),
        date: date!(2024 - 05 - 15),
        teaser: LocalizedString::new(
            "Besichtigen Sie unsere neue Musterwohnung und erleben Sie modernen Wohnkomfort.",
            "Visit our new show apartment and experience modern living comfort.",
        ),
    },
    NewsItem {
        id: "5",
        title: LocalizedString::new(
            "Gemeinschaftsgarten-Projekt startet",
            "Community Garden Project Launches",
        ),
        date: date!(2024 - 06 - 01),
        teaser: LocalizedString::new(
            "Ein neuer Gemeinschaftsgarten wird angelegt. Interessierte Bewohner können sich ab sofort anmelden.",
            "A new community garden is being created. Interested residents can sign up now.",
        ),
    },
    NewsItem {
        id: "6",
        title: LocalizedString::new("Sommerfest 2024", "Summer Festival 2024"),
        date: date!(2024 - 07 - 15),
        teaser: LocalizedString::new(
            "Großes Sommerfest mit Live-Musik, Kinderprogramm und kulinarischen Highlights.",
            "Big summer festival with live music, children's program and culinary highlights.",
        ),
    },
];
