use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::content::{Anchor, NEWSLETTER_CATEGORIES};
use crate::core::forms::{FeedbackForm, NewsletterForm};
use crate::i18n::Lang;
use crate::t;

/// Newsletter sign-up, feedback box and legal links.
///
/// Both send buttons accept whatever was typed and drop it: there is no
/// delivery service behind them. Nothing is cleared on send.
#[component]
pub fn SiteFooter(lang: Lang) -> Element {
    let mut newsletter = use_signal(NewsletterForm::default);
    let mut feedback = use_signal(FeedbackForm::default);

    let form = newsletter();
    let email = form.email().to_string();
    let message = feedback().message().to_string();
    let email_placeholder = t!(lang, "footer-email-placeholder");
    let feedback_placeholder = t!(lang, "footer-feedback-placeholder");

    rsx! {
        footer { id: Anchor::Newsletter.id(), class: "site-footer",
            div { class: "site-footer__inner",
                div { class: "site-footer__newsletter",
                    h3 { class: "site-footer__title", {t!(lang, "footer-newsletter-title")} }
                    p { class: "site-footer__intro", {t!(lang, "footer-newsletter-intro")} }

                    div { class: "site-footer__categories",
                        for category in NEWSLETTER_CATEGORIES.iter() {
                            div { key: "{category.id}", class: "site-footer__category",
                                label { class: "site-footer__category-label",
                                    input {
                                        r#type: "checkbox",
                                        checked: form.is_selected(category.id),
                                        onchange: move |_| newsletter.with_mut(|f| f.toggle_category(category.id)),
                                    }
                                    span { {category.label.get(lang)} }
                                }
                                span { class: "site-footer__info", tabindex: 0,
                                    span { aria_hidden: "true", "ⓘ" }
                                    span { class: "site-footer__info-text", {category.description.get(lang)} }
                                }
                            }
                        }
                    }

                    div { class: "site-footer__signup",
                        input {
                            r#type: "email",
                            class: "site-footer__email",
                            placeholder: "{email_placeholder}",
                            value: "{email}",
                            oninput: move |evt: FormEvent| newsletter.with_mut(|f| f.set_email(evt.value())),
                        }
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            aria_label: t!(lang, "footer-subscribe"),
                            onclick: move |_| {
                                let form = newsletter.read();
                                debug!(signup = ?form.signup(), "newsletter send has no delivery backend; discarded");
                            },
                            span { aria_hidden: "true", "✉" }
                        }
                    }
                }

                div { class: "site-footer__feedback",
                    h3 { class: "site-footer__title", {t!(lang, "footer-feedback-title")} }
                    textarea {
                        class: "site-footer__message",
                        placeholder: "{feedback_placeholder}",
                        value: "{message}",
                        oninput: move |evt: FormEvent| feedback.with_mut(|f| f.set_message(evt.value())),
                    }
                    div {
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            onclick: move |_| {
                                let chars = feedback.read().len();
                                debug!(chars, "feedback send has no delivery backend; discarded");
                            },
                            span { aria_hidden: "true", "➤" }
                            {t!(lang, "footer-send")}
                        }
                    }
                }

                div { class: "site-footer__legal",
                    a { href: "#", {t!(lang, "footer-imprint")} }
                    a { href: "#", {t!(lang, "footer-privacy")} }
                    a { href: "#", {t!(lang, "footer-contact-management")} }
                }
            }
        }
    }
}
