use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::content::{Anchor, NAV_ITEMS};
use crate::core::header::{HeaderState, HEADER_OFFSET_PX, SEARCH_FOCUS_DELAY_MS};
use crate::core::{platform, timing};
use crate::i18n::Lang;
use crate::t;

const BRAND: &str = "Steingauquartier";

/// Fixed top bar: brand, in-page navigation, search, language switch, login.
///
/// The header never owns the language. It renders from the `lang` it is
/// handed and asks the root to flip it through `on_toggle_language`; the
/// desktop switch and the mobile menu's switch share that single callback.
///
/// Navigation links scroll smoothly to their section (minus the header
/// height) and always close the mobile menu.
#[component]
pub fn SiteHeader(lang: Lang, on_toggle_language: EventHandler<()>) -> Element {
    let mut state = use_signal(HeaderState::default);
    let mut search_input: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let header = state();
    let query = header.query().to_string();
    let search_placeholder = t!(lang, "search-placeholder");
    let login_label = t!(lang, "nav-login");
    let abbreviation = lang.abbreviation();
    let other_language = lang.toggled().native_name();

    let search_class = if header.search_open() {
        "site-header__search site-header__search--open"
    } else {
        "site-header__search"
    };

    let toggle_search = move |_: MouseEvent| {
        let opened = state.with_mut(|s| s.toggle_search());
        if opened {
            spawn(async move {
                timing::sleep_ms(SEARCH_FOCUS_DELAY_MS).await;
                if let Some(input) = search_input() {
                    if let Err(err) = input.set_focus(true).await {
                        warn!("search focus failed: {err:?}");
                    }
                }
            });
        }
    };

    rsx! {
        header {
            id: "site-header",
            class: "site-header",
            div { class: "site-header__inner",
                a { class: "site-header__brand", href: "/", "{BRAND}" }

                nav { class: "site-header__links",
                    for item in NAV_ITEMS.iter() {
                        a {
                            key: "{item.target.id()}",
                            class: "site-header__link",
                            href: "{item.target.href()}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                navigate(state, item.target);
                            },
                            {item.label.get(lang)}
                        }
                    }
                }

                div { class: "site-header__tools",
                    div { class: "{search_class}",
                        input {
                            id: "site-search",
                            r#type: "text",
                            class: "site-header__search-input",
                            placeholder: "{search_placeholder}",
                            value: "{query}",
                            oninput: move |evt: FormEvent| state.with_mut(|s| s.set_query(evt.value())),
                            onmounted: move |evt: MountedEvent| search_input.set(Some(evt.data())),
                        }
                        button {
                            r#type: "button",
                            class: "site-header__icon-button",
                            aria_label: t!(lang, "search-toggle"),
                            onclick: toggle_search,
                            span { aria_hidden: "true", "⌕" }
                        }
                    }

                    button {
                        r#type: "button",
                        class: "site-header__language",
                        aria_label: t!(lang, "nav-language-toggle"),
                        onclick: move |_| on_toggle_language.call(()),
                        span { aria_hidden: "true", "🌐" }
                        span { class: "site-header__language-code", "{abbreviation}" }
                    }

                    button { r#type: "button", class: "site-header__login",
                        span { aria_hidden: "true", "⇥" }
                        span { "{login_label}" }
                    }
                }

                button {
                    r#type: "button",
                    class: "site-header__menu-toggle",
                    aria_label: t!(lang, "nav-menu-toggle"),
                    aria_expanded: "{header.menu_open()}",
                    onclick: move |_| state.with_mut(|s| s.toggle_menu()),
                    if header.menu_open() { "✕" } else { "☰" }
                }
            }

            if header.menu_open() {
                div { class: "site-header__mobile",
                    for item in NAV_ITEMS.iter() {
                        a {
                            key: "mobile-{item.target.id()}",
                            class: "site-header__mobile-link",
                            href: "{item.target.href()}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                navigate(state, item.target);
                            },
                            {item.label.get(lang)}
                        }
                    }
                    div { class: "site-header__mobile-tools",
                        button {
                            r#type: "button",
                            class: "site-header__mobile-language",
                            onclick: move |_| on_toggle_language.call(()),
                            span { aria_hidden: "true", "🌐" }
                            span { "{other_language}" }
                        }
                        button { r#type: "button", class: "site-header__mobile-login",
                            span { aria_hidden: "true", "⇥" }
                            span { "{login_label}" }
                        }
                    }
                }
            }
        }
    }
}

fn navigate(mut state: Signal<HeaderState>, target: Anchor) {
    debug!(anchor = target.id(), "header navigation");
    platform::run_script(platform::scroll_to_section_script(target, HEADER_OFFSET_PX));
    state.with_mut(|s| s.navigated());
}
