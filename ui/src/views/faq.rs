use dioxus::prelude::*;

use crate::content::{Anchor, FAQ_ITEMS};
use crate::core::accordion::Accordion;
use crate::i18n::Lang;
use crate::t;

#[component]
pub fn FaqSection(lang: Lang) -> Element {
    let mut accordion = use_signal(|| Accordion::new(FAQ_ITEMS.len()));
    let state = accordion();

    rsx! {
        section { id: Anchor::Faq.id(), class: "section section--muted faq",
            div { class: "section__inner section__inner--narrow",
                h2 { class: "section__title", {t!(lang, "faq-title")} }

                div { class: "faq__list",
                    for (index, item) in FAQ_ITEMS.iter().enumerate() {
                        div { key: "{index}", class: "faq__item",
                            button {
                                r#type: "button",
                                class: "faq__question",
                                aria_expanded: "{state.is_open(index)}",
                                onclick: move |_| accordion.with_mut(|a| a.toggle(index)),
                                span { {item.question.get(lang)} }
                                span { class: "faq__chevron", aria_hidden: "true",
                                    if state.is_open(index) { "▴" } else { "▾" }
                                }
                            }
                            if state.is_open(index) {
                                div { class: "faq__answer",
                                    p { {item.answer.get(lang)} }
                                }
                            }
                        }
                    }
                }

                div { class: "faq__actions",
                    button { r#type: "button", class: "button button--outline",
                        span { aria_hidden: "true", "💬" }
                        {t!(lang, "faq-submit-question")}
                    }
                }
            }
        }
    }
}
