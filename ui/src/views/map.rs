use dioxus::prelude::*;

use crate::content::{Anchor, Building, MapPoint, BUILDINGS};
use crate::core::selection::{tooltip_anchor, MapSelection};
use crate::i18n::Lang;
use crate::t;

/// Site plan with one hotspot per building and a detail panel.
///
/// Hovering shows a tooltip; clicking pins the building in the panel. The
/// two are independent, so moving the pointer away never clears the panel.
#[component]
pub fn InteractiveMap(lang: Lang) -> Element {
    let mut selection = use_signal(MapSelection::default);
    let current = selection();

    rsx! {
        section { id: Anchor::Overview.id(), class: "section map",
            div { class: "section__inner",
                h2 { class: "section__title", {t!(lang, "map-title")} }

                div { class: "map__layout",
                    div { class: "map__canvas",
                        for building in BUILDINGS.iter() {
                            button {
                                key: "{building.id}",
                                r#type: "button",
                                class: hotspot_class(current, building.id),
                                style: position_style(building.coordinates),
                                aria_label: building.name.get(lang),
                                onmouseenter: move |_| selection.with_mut(|s| s.hover(building.id)),
                                onmouseleave: move |_| selection.with_mut(|s| s.unhover()),
                                onclick: move |_| selection.with_mut(|s| s.select(building.id)),
                            }
                        }

                        if let Some(hovered) = current.hovered() {
                            div {
                                class: "map__tooltip",
                                style: position_style(tooltip_anchor(hovered.coordinates)),
                                p { class: "map__tooltip-name", {hovered.name.get(lang)} }
                                p { class: "map__tooltip-status", {hovered.status.get(lang)} }
                            }
                        }
                    }

                    div { class: "map__details",
                        if let Some(building) = current.selected() {
                            {building_details(lang, building)}
                        } else {
                            p { class: "map__placeholder", {t!(lang, "map-placeholder")} }
                        }
                    }
                }
            }
        }
    }
}

fn building_details(lang: Lang, building: &'static Building) -> Element {
    rsx! {
        div { class: "map__building",
            h3 { class: "map__building-name", {building.name.get(lang)} }
            p { class: "map__building-description", {building.description.get(lang)} }
            h4 { class: "map__building-facts-title", {t!(lang, "map-key-facts")} }
            ul { class: "map__building-facts",
                for fact in building.key_facts.get(lang).iter() {
                    li { "{fact}" }
                }
            }
            p { class: "map__building-status", {building.status.get(lang)} }
            button { r#type: "button", class: "button button--primary",
                {t!(lang, "map-learn-more")}
            }
        }
    }
}

fn hotspot_class(selection: MapSelection, building_id: &str) -> &'static str {
    if selection.selected_id() == Some(building_id) {
        "map__hotspot map__hotspot--selected"
    } else {
        "map__hotspot"
    }
}

fn position_style(point: MapPoint) -> String {
    format!("left: {}%; top: {}%;", point.x, point.y)
}
