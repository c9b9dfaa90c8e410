use super::LocalizedString;

/// Rotating one-liners shown in the hero banner.
pub static TICKER_MESSAGES: &[LocalizedString] = &[
    LocalizedString::new(
        "Willkommen an unsere neuen Bewohner in Gebäude A! 🏠",
        "Welcome to our new residents in Building A! 🏠",
    ),
    LocalizedString::new(
        "Gemeinschaftsgarten eröffnet dieses Wochenende 🌸",
        "Community garden opening this weekend 🌸",
    ),
    LocalizedString::new(
        "Wartungsarbeiten in Gebäude C am Montag geplant",
        "Maintenance work scheduled for Building C on Monday",
    ),
    LocalizedString::new(
        "Neue E-Ladestationen in der Tiefgarage verfügbar ⚡",
        "New EV charging stations available in underground parking ⚡",
    ),
];
