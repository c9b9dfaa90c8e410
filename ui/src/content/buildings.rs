use super::{Building, LocalizedString, LocalizedStringList, MapPoint};

pub static BUILDINGS: &[Building] = &[Building {
    id: "b1",
    name: LocalizedString::new("Wohngebäude A", "Residential Building A"),
    description: LocalizedString::new(
        "Modernes Wohngebäude mit 24 Wohneinheiten",
        "Modern residential building with 24 units",
    ),
    status: LocalizedString::new("Wohnungen verfügbar", "Apartments available"),
    key_facts: LocalizedStringList::new(
        &["2-4 Zimmer Wohnungen", "Aufzug", "Tiefgarage"],
        &["2-4 room apartments", "Elevator", "Underground parking"],
    ),
    coordinates: MapPoint { x: 30.0, y: 40.0 },
}];
