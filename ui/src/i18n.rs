//! Internationalization (i18n) support for `steingau-ui`.
//!
//! Two kinds of text appear on the site:
//! - hand-authored content records (news, FAQ, buildings, ...) carry both
//!   languages inline as [`LocalizedString`](crate::content::LocalizedString);
//! - interface chrome (headings, buttons, placeholders) lives in Fluent
//!   bundles under `i18n/`, embedded with `rust-embed` and resolved with
//!   `i18n-embed` / `i18n-embed-fl`.
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/steingau-ui.ftl   (fallback/reference)
//!   de-DE/steingau-ui.ftl
//! ```
//!
//! There is no process-wide "current language". Every lookup names the
//! language it wants, so a section always renders from exactly the language
//! it was handed:
//! ```ignore
//! use ui::i18n::Lang;
//! let heading = ui::t!(Lang::De, "gallery-title"); // "Galerie"
//! ```
use std::fmt;
use std::str::FromStr;

use dioxus::logger::tracing::warn;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Translation macro keyed by an explicit language.
/// Examples:
///     t!(lang, "nav-login")
///     t!(lang, key, name = value)   (Fluent arguments)
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate name and the FTL filename).
const DOMAIN: &str = "steingau-ui";

/// Locale whose bundle must define every key.
const FALLBACK_LOCALE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// The two languages the site is authored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    De,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::De, Lang::En];

    /// Two-letter language tag.
    pub fn code(self) -> &'static str {
        match self {
            Lang::De => "de",
            Lang::En => "en",
        }
    }

    /// Upper-case tag shown next to the globe in the header.
    pub fn abbreviation(self) -> String {
        self.code().to_uppercase()
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::De => Lang::En,
            Lang::En => Lang::De,
        }
    }

    /// Name of the language in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::De => "Deutsch",
            Lang::En => "English",
        }
    }

    /// Folder name of the Fluent bundle for this language.
    pub fn locale(self) -> &'static str {
        match self {
            Lang::De => "de-DE",
            Lang::En => "en-US",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language tag `{0}`")]
pub struct UnknownLanguage(pub String);

impl FromStr for Lang {
    type Err = UnknownLanguage;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "de" => Ok(Lang::De),
            "en" => Ok(Lang::En),
            _ => Err(UnknownLanguage(tag.to_string())),
        }
    }
}

static GERMAN: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Lang::De));
static ENGLISH: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Lang::En));

/// Loader holding the bundle for `lang` (plus the fallback bundle).
pub fn loader(lang: Lang) -> &'static FluentLanguageLoader {
    match lang {
        Lang::De => &GERMAN,
        Lang::En => &ENGLISH,
    }
}

fn build_loader(lang: Lang) -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = FALLBACK_LOCALE
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Plain strings in the DOM; no bidi isolation marks around placeables.
    loader.set_use_isolating(false);

    match lang.locale().parse::<LanguageIdentifier>() {
        Ok(requested) => {
            if let Err(err) = i18n_embed::select(&loader, &Localizations, &[requested]) {
                warn!(%lang, "failed selecting localization bundle ({err}); continuing with fallback");
            }
        }
        Err(err) => warn!(%lang, "invalid locale identifier ({err}); continuing with fallback"),
    }
    loader
}

/// List available (embedded) locale folders.
pub fn available_locales() -> Vec<String> {
    let mut locales = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    locales.sort();
    locales.dedup();
    locales
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_an_embedded_bundle() {
        let locales = available_locales();
        for lang in Lang::ALL {
            assert!(
                locales.iter().any(|l| l == lang.locale()),
                "missing bundle for {lang}"
            );
        }
    }

    #[test]
    fn lookups_follow_the_requested_language() {
        assert_eq!(crate::t!(Lang::De, "gallery-title"), "Galerie");
        assert_eq!(crate::t!(Lang::En, "gallery-title"), "Gallery");
    }

    #[test]
    fn toggling_twice_returns_to_the_original_language() {
        for lang in Lang::ALL {
            assert_ne!(lang.toggled(), lang);
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }

    #[test]
    fn abbreviation_is_upper_case_code() {
        assert_eq!(Lang::De.abbreviation(), "DE");
        assert_eq!(Lang::En.abbreviation(), "EN");
        for lang in Lang::ALL {
            assert_eq!(lang.abbreviation(), lang.code().to_uppercase());
        }
    }

    #[test]
    fn parses_tags_with_regions() {
        assert_eq!("de".parse::<Lang>(), Ok(Lang::De));
        assert_eq!("en-US".parse::<Lang>(), Ok(Lang::En));
        assert_eq!("DE_at".parse::<Lang>(), Ok(Lang::De));
        assert_eq!(
            "fr-FR".parse::<Lang>(),
            Err(UnknownLanguage("fr-FR".to_string()))
        );
    }

    #[test]
    fn initial_language_is_german() {
        assert_eq!(Lang::default(), Lang::De);
    }
}
