//! Interface strings for the translator widget.
//!
//! Fluent bundles under `ui/i18n/<locale>/polyglot-ui.ftl` are embedded at
//! compile time and looked up through the [`t!`](crate::t) macro. `en-US` is
//! the fallback; `es-ES` and `fr-FR` are selectable from the navbar.
//!
//! The interface language is independent of the translation language pair:
//! switching the UI to Spanish does not touch the source/target selectors.
use std::sync::Once;

use dioxus::logger::tracing::{info, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Looks up an interface string, optionally with Fluent arguments:
/// `t!("translate-button")`, `t!("translate-error", reason = err)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Bundle name; also the `.ftl` file name inside each locale folder.
const DOMAIN: &str = "polyglot-ui";

/// Locale every bundle is checked against.
pub const FALLBACK_LOCALE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Locales;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LOCALE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default());
    FluentLanguageLoader::new(DOMAIN, fallback)
});

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("`{0}` is not a language tag")]
    InvalidTag(String),
    #[error("no interface strings bundled for `{0}`")]
    Unsupported(String),
    #[error(transparent)]
    Select(#[from] i18n_embed::I18nEmbedError),
}

static INIT: Once = Once::new();

/// Selects the interface language from the browser or OS preferences.
/// Later calls do nothing.
pub fn init() {
    INIT.call_once(|| {
        match i18n_embed::select(&*LOADER, &Locales, &requested_languages()) {
            Ok(_) => info!(locale = %LOADER.current_language(), "interface language selected"),
            Err(err) => warn!(%err, "interface language selection failed; using {FALLBACK_LOCALE}"),
        }
    });
}

/// Switches the interface language to one of the bundled locales.
///
/// Tags without a bundle are rejected instead of silently falling back, so the
/// navbar selection never drifts from the strings on screen.
pub fn set_language(tag: &str) -> Result<LanguageIdentifier, LocaleError> {
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|_| LocaleError::InvalidTag(tag.to_string()))?;
    if !available_languages().iter().any(|code| *code == lang.to_string()) {
        return Err(LocaleError::Unsupported(tag.to_string()));
    }
    i18n_embed::select(&*LOADER, &Locales, &[lang.clone()])?;
    Ok(lang)
}

/// Tag of the language currently used for interface strings.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Bundled locale tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut tags: Vec<String> = Locales::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
