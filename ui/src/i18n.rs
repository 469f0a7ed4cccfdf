//! Localized strings for the navbar.
//!
//! Only the landmark labels of the link groups go through here; brand and link
//! labels are literals. Bundles live in `i18n/<lang>/lesa-ui.ftl` and are
//! embedded at compile time. `i18n.toml` pins the same domain for the
//! compile-time key checks done by `fl!`.
//!
//! ```ignore
//! ui::i18n::init(); // idempotent
//! let label = ui::t!("nav-primary-label");
//! ```
use std::collections::BTreeSet;
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// Looks up a message key in the shared [`LOADER`], checked at compile time.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
}

const DOMAIN: &str = "lesa-ui";
const FALLBACK: LanguageIdentifier = langid!("en-US");

#[derive(Embed)]
#[folder = "i18n"]
struct Bundles;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, FALLBACK));

static INIT: Once = Once::new();

fn select(requested: &[LanguageIdentifier]) -> Result<Vec<LanguageIdentifier>, I18nEmbedError> {
    let selected = i18n_embed::select(&*LOADER, &Bundles, requested)?;
    debug!("[i18n] requested {requested:?}, selected {selected:?}");
    Ok(selected)
}

/// Loads bundles for the languages the platform asks for. Runs once.
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = select(&requested_languages()) {
            warn!("[i18n] language selection failed ({err}); staying on {FALLBACK}");
        }
    });
}

/// Switches language at runtime. Unparseable tags are ignored; unknown
/// languages fall back to en-US.
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    match tag.parse::<LanguageIdentifier>() {
        Ok(lang) => select(&[lang]).map(drop),
        Err(_) => Ok(()),
    }
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    Bundles::iter()
        .filter_map(|path| path.split_once('/').map(|(lang, _)| lang.to_string()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    const I18N_TOML: &str = include_str!("../i18n.toml");

    #[test]
    fn embedded_languages() {
        assert_eq!(available_languages(), ["en-US", "fr-FR"]);
    }

    #[test]
    fn compile_time_domain_matches_runtime_domain() {
        let pinned = I18N_TOML
            .lines()
            .filter_map(|line| line.trim().strip_prefix("domain"))
            .filter_map(|rest| rest.trim().strip_prefix('='))
            .map(|value| value.trim().trim_matches('"'))
            .next();
        assert_eq!(pinned, Some(DOMAIN), "i18n.toml must pin domain = \"{DOMAIN}\"");

        let fallback_file = format!("{FALLBACK}/{DOMAIN}.ftl");
        assert!(
            Bundles::get(&fallback_file).is_some(),
            "missing embedded {fallback_file}"
        );
    }

    #[test]
    fn invalid_tag_is_ignored() {
        init();
        assert!(set_language("not a tag!").is_ok());
    }

    #[test]
    fn unknown_language_keeps_a_usable_bundle() {
        init();
        let _ = set_language("zz-ZZ");
        let label = fl!(&*LOADER, "nav-primary-label");
        assert!(!label.is_empty());
        assert_ne!(label, "nav-primary-label");
    }
}
