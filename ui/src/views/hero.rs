use dioxus::prelude::*;

use crate::content::{Anchor, HERO_IMAGE, TICKER_MESSAGES};
use crate::core::platform;
use crate::core::ticker::{Ticker, TICKER_INTERVAL_MS};
use crate::core::timing;
use crate::i18n::Lang;
use crate::t;

/// Full-height banner with the rotating news ticker.
#[component]
pub fn Hero(lang: Lang) -> Element {
    let mut ticker = use_signal(|| Ticker::new(TICKER_MESSAGES.len()));

    // Scoped to this component: cancelled on unmount.
    use_future(move || async move {
        loop {
            timing::sleep_ms(TICKER_INTERVAL_MS).await;
            ticker.with_mut(|t| t.advance());
        }
    });

    let message = ticker()
        .current()
        .and_then(|i| TICKER_MESSAGES.get(i))
        .map(|m| m.get(lang));
    let backdrop = format!("background-image: url('{HERO_IMAGE}');");

    rsx! {
        section { class: "hero",
            div { class: "hero__backdrop", style: "{backdrop}",
                div { class: "hero__shade" }
            }
            div { class: "hero__content",
                h1 { class: "hero__title", {t!(lang, "hero-title")} }
                p { class: "hero__subtitle", {t!(lang, "hero-subtitle")} }
                button {
                    r#type: "button",
                    class: "button button--light",
                    onclick: move |_| platform::run_script(platform::scroll_into_view_script(Anchor::Newsletter)),
                    {t!(lang, "hero-cta")}
                }

                if let Some(text) = message {
                    div { class: "hero__ticker",
                        div { class: "hero__ticker-text", "{text}" }
                    }
                }

                div { class: "hero__scroll-hint", aria_hidden: "true", "⌄" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn english_hero_shows_first_message() {
        let html = render(|| rsx! { Hero { lang: Lang::En } });
        assert!(html.contains("Welcome to our new residents in Building A!"));
        assert!(html.contains("Welcome to Steingauquartier"));
        assert!(html.contains("Subscribe to Newsletter"));
        assert!(!html.contains("Willkommen"));
    }

    #[test]
    fn german_hero_shows_first_message() {
        let html = render(|| rsx! { Hero { lang: Lang::De } });
        assert!(html.contains(TICKER_MESSAGES[0].de));
        assert!(html.contains("Newsletter abonnieren"));
        assert!(!html.contains("Welcome"));
    }

    #[test]
    fn backdrop_uses_hero_image() {
        let html = render(|| rsx! { Hero { lang: Lang::En } });
        // The query string's `&` is escaped in the attribute.
        let path = HERO_IMAGE.split('?').next().unwrap_or(HERO_IMAGE);
        assert!(html.contains(path));
    }
}
