use super::{FaqItem, LocalizedString};

pub static FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        question: LocalizedString::new(
            "Wann werden die ersten Wohnungen bezugsfertig?",
            "When will the first apartments be ready for occupancy?",
        ),
        answer: LocalizedString::new(
            "Die ersten Wohnungen in Block A werden voraussichtlich im Sommer 2024 bezugsfertig sein.",
            "The first apartments in Block A are expected to be ready for occupancy in summer 2024.",
        ),
    },
    FaqItem {
        question: LocalizedString::new(
            "Gibt es Tiefgaragenplätze für alle Wohnungen?",
            "Are there underground parking spaces for all apartments?",
        ),
        answer: LocalizedString::new(
            "Ja, zu jeder Wohnung gehört ein Tiefgaragenstellplatz. Zusätzliche Stellplätze können angemietet werden.",
            "Yes, each apartment comes with one underground parking space. Additional spaces can be rented.",
        ),
    },
    FaqItem {
        question: LocalizedString::new(
            "Wie ist die Anbindung an den öffentlichen Nahverkehr?",
            "How is the public transport connection?",
        ),
        answer: LocalizedString::new(
            "Die nächste Bushaltestelle ist nur 2 Minuten entfernt. Von dort fahren regelmäßig Busse in die Innenstadt und zum Bahnhof.",
            "The nearest bus stop is only 2 minutes away. Buses run regularly to the city center and train station.",
        ),
    },
    FaqItem {
        question: LocalizedString::new(
            "Gibt es Einkaufsmöglichkeiten in der Nähe?",
            "Are there shopping facilities nearby?",
        ),
        answer: LocalizedString::new(
            "In unmittelbarer Nähe befinden sich mehrere Supermärkte, Bäckereien und andere Geschäfte des täglichen Bedarfs.",
            "There are several supermarkets, bakeries, and other daily needs stores in the immediate vicinity.",
        ),
    },
    FaqItem {
        question: LocalizedString::new(
            "Wie erfolgt die Heizung und Warmwasserversorgung?",
            "How is heating and hot water supplied?",
        ),
        answer: LocalizedString::new(
            "Das Quartier verfügt über ein nachhaltiges Energiekonzept mit Wärmepumpen und Photovoltaikanlagen.",
            "The quarter has a sustainable energy concept with heat pumps and photovoltaic systems.",
        ),
    },
];
