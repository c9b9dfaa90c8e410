use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::content::{Anchor, NewsItem, NEWS_ITEMS};
use crate::core::format::{format_date, iso_date};
use crate::core::pager::Pager;
use crate::core::platform;
use crate::i18n::Lang;
use crate::t;

/// News cards shown per page.
pub const NEWS_PAGE_SIZE: usize = 4;

#[component]
pub fn NewsSection(lang: Lang) -> Element {
    let mut pager = use_signal(|| Pager::new(NEWS_ITEMS.len(), NEWS_PAGE_SIZE));
    let current = pager();
    let visible = current.visible(NEWS_ITEMS);

    rsx! {
        section { id: Anchor::News.id(), class: "section section--muted news",
            div { class: "section__inner",
                h2 { class: "section__title", {t!(lang, "news-title")} }

                div { class: "news__carousel",
                    div { class: "news__grid",
                        for item in visible.iter() {
                            {news_card(lang, item)}
                        }
                    }

                    if current.has_multiple_pages() {
                        div { class: "news__pager",
                            button {
                                r#type: "button",
                                class: "pager-button",
                                aria_label: t!(lang, "news-previous"),
                                onclick: move |_| {
                                    let page = pager.with_mut(|p| {
                                        p.previous();
                                        p.page()
                                    });
                                    debug!(page, "news page");
                                },
                                "‹"
                            }
                            button {
                                r#type: "button",
                                class: "pager-button",
                                aria_label: t!(lang, "news-next"),
                                onclick: move |_| {
                                    let page = pager.with_mut(|p| {
                                        p.next();
                                        p.page()
                                    });
                                    debug!(page, "news page");
                                },
                                "›"
                            }
                        }
                    }
                }

                div { class: "news__actions",
                    button { r#type: "button", class: "button button--primary",
                        span { aria_hidden: "true", "📅" }
                        {t!(lang, "news-calendar")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--outline",
                        onclick: move |_| platform::run_script(platform::scroll_into_view_script(Anchor::Newsletter)),
                        span { aria_hidden: "true", "✉" }
                        {t!(lang, "news-subscribe")}
                    }
                }
            }
        }
    }
}

fn news_card(lang: Lang, item: &'static NewsItem) -> Element {
    rsx! {
        article { key: "{item.id}", class: "news__card",
            time { class: "news__date", datetime: iso_date(item.date), {format_date(item.date, lang)} }
            h3 { class: "news__title", {item.title.get(lang)} }
            p { class: "news__teaser", {item.teaser.get(lang)} }
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
    fn first_page_holds_four_items() {
        let html = render(|| rsx! { NewsSection { lang: Lang::En } });
        assert_eq!(html.matches("news__card").count(), NEWS_PAGE_SIZE);
        assert!(html.contains("Construction Progress: New Apartments in Block A"));
        assert!(html.contains("Open House: Show Apartment Block B"));
        assert!(!html.contains("Summer Festival 2024"));
        assert!(html.contains("pager-button"));
    }

    #[test]
    fn dates_follow_the_language() {
        let de = render(|| rsx! { NewsSection { lang: Lang::De } });
        assert!(de.contains("15.3.2024"));
        assert!(de.contains("Zum Eventkalender"));
        assert!(!de.contains("Go to Event Calendar"));

        let en = render(|| rsx! { NewsSection { lang: Lang::En } });
        assert!(en.contains("3/15/2024"));
    }
}
