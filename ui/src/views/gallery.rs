use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::content::{Anchor, GALLERY_IMAGES};
use crate::core::gallery::GalleryState;
use crate::core::platform::{self, ScrollDirection};
use crate::i18n::Lang;
use crate::t;

const STRIP_ID: &str = "gallery-strip";

/// Horizontally scrolling image strip with a fullscreen overlay.
#[component]
pub fn GallerySection(lang: Lang) -> Element {
    let mut gallery = use_signal(|| GalleryState::new(GALLERY_IMAGES.len()));
    let state = gallery();
    let overlay_image = state
        .current()
        .filter(|_| state.is_fullscreen())
        .and_then(|i| GALLERY_IMAGES.get(i));

    let previous_label = t!(lang, "gallery-previous");
    let next_label = t!(lang, "gallery-next");
    let fullscreen_label = t!(lang, "gallery-fullscreen");

    rsx! {
        section { id: Anchor::Gallery.id(), class: "section gallery",
            div { class: "section__inner",
                h2 { class: "section__title", {t!(lang, "gallery-title")} }

                div { class: "gallery__viewport",
                    div { id: STRIP_ID, class: "gallery__strip",
                        for (index, src) in GALLERY_IMAGES.iter().enumerate() {
                            div { key: "{index}", class: "gallery__slide",
                                img { class: "gallery__image", src: "{src}", alt: "" }
                                button {
                                    r#type: "button",
                                    class: "gallery__maximize",
                                    aria_label: "{fullscreen_label}",
                                    onclick: move |_| gallery.with_mut(|g| g.open_fullscreen(index)),
                                    "⤢"
                                }
                            }
                        }
                    }

                    button {
                        r#type: "button",
                        class: "gallery__nav gallery__nav--previous",
                        aria_label: "{previous_label}",
                        onclick: move |_| step(gallery, ScrollDirection::Back),
                        "‹"
                    }
                    button {
                        r#type: "button",
                        class: "gallery__nav gallery__nav--next",
                        aria_label: "{next_label}",
                        onclick: move |_| step(gallery, ScrollDirection::Forward),
                        "›"
                    }
                }

                if let Some(src) = overlay_image {
                    div { class: "gallery__overlay", role: "dialog",
                        button {
                            r#type: "button",
                            class: "gallery__overlay-close",
                            aria_label: t!(lang, "gallery-close"),
                            onclick: move |_| gallery.with_mut(|g| g.close_fullscreen()),
                            "✕"
                        }
                        button {
                            r#type: "button",
                            class: "gallery__overlay-nav gallery__overlay-nav--previous",
                            aria_label: "{previous_label}",
                            onclick: move |_| step(gallery, ScrollDirection::Back),
                            "‹"
                        }
                        img { class: "gallery__overlay-image", src: "{src}", alt: "" }
                        button {
                            r#type: "button",
                            class: "gallery__overlay-nav gallery__overlay-nav--next",
                            aria_label: "{next_label}",
                            onclick: move |_| step(gallery, ScrollDirection::Forward),
                            "›"
                        }
                    }
                }
            }
        }
    }
}

/// Pages the strip and moves the index together; the index wraps on its own
/// even when the strip is already at its end.
fn step(mut gallery: Signal<GalleryState>, direction: ScrollDirection) {
    platform::run_script(platform::scroll_strip_script(STRIP_ID, direction));
    let index = gallery.with_mut(|g| {
        match direction {
            ScrollDirection::Back => g.previous(),
            ScrollDirection::Forward => g.next(),
        }
        g.current()
    });
    debug!(?index, "gallery step");
}
