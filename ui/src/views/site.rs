use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::SiteHeader;
use crate::i18n::Lang;

use super::{FaqSection, GallerySection, Hero, InteractiveMap, NewsSection, SiteFooter};

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The whole page.
///
/// Holds the only cross-section state, the language, and hands it to every
/// section as a prop. Only the header may request a change.
#[component]
pub fn Site() -> Element {
    let mut lang = use_signal(Lang::default);
    let current = lang();

    let toggle_language = move |_: ()| {
        let next = lang().toggled();
        debug!(from = %lang(), to = %next, "language toggled");
        lang.set(next);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        div { class: "site", lang: current.code(),
            SiteHeader { lang: current, on_toggle_language: toggle_language }
            main {
                Hero { lang: current }
                InteractiveMap { lang: current }
                NewsSection { lang: current }
                GallerySection { lang: current }
                FaqSection { lang: current }
            }
            SiteFooter { lang: current }
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
    fn starts_in_german() {
        let html = render(Site);
        assert!(html.contains(r#"lang="de""#));
        assert!(html.contains(">DE<"));
        assert!(html.contains("Übersicht"));
        assert!(html.contains("Impressum"));
    }

    #[test]
    fn german_page_carries_no_english_chrome() {
        let html = render(Site);
        for english in ["Overview", "Login", "Subscribe to Newsletter", "Gallery", "Privacy Policy"] {
            assert!(!html.contains(english), "found `{english}` on the German page");
        }
    }

    #[test]
    fn every_section_is_present() {
        let html = render(Site);
        for id in ["site-header", "overview", "news", "gallery", "faq", "newsletter"] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing #{id}");
        }
    }
}
