//! Faro internationalization (i18n)
//!
//! Goals:
//! - Translation lookup over JSON message catalogs, keyed by locale tag
//! - gettext-style call surface: the untranslated string doubles as its own
//!   lookup key and fallback text
//! - Plural-form selection per the active locale's CLDR cardinal rules
//! - Startup locale resolution against the user's ranked OS locale list
//! - A "never raises" contract: translation calls always return a string,
//!   worst case the caller's fallback text with placeholders substituted
//!
//! Catalogs are JSON objects mapping a message id to either a plain string
//! or an object of plural-form variants (`one`, `few`, `many`, `other`,
//! ...). Messages may carry `{name}` placeholders, filled from
//! [`TemplateData`].
//!
//! The toolkit's stock strings are compiled in; applications add their own
//! catalogs with [`register_catalog`] or [`register_catalog_for_locale`].

mod args;
mod catalog;
mod error;
mod locale;
mod localizer;
mod plural;
mod state;
mod store;
mod template;

pub use args::{ArgValue, TemplateData};
pub use catalog::{MessageCatalog, MessageEntry, PluralMessage};
pub use error::I18nError;
pub use intl_pluralrules::PluralCategory;
pub use locale::{system_locales, LocaleTag};
pub use localizer::Localizer;
pub use plural::PluralSelector;
pub use state::Localization;
pub use store::BundleStore;

/// Translate a string, gettext-style: the input is both the lookup key and
/// the literal fallback text.
pub fn translate(text: &str) -> String {
    Localization::get().translate(text)
}

/// [`translate`], rendering the result against template data.
pub fn translate_with(text: &str, data: &TemplateData) -> String {
    Localization::get().translate_with(text, data)
}

/// Translate the message with a specific id, using `fallback` when no
/// catalog defines it.
pub fn translate_key(key: &str, fallback: &str) -> String {
    Localization::get().translate_key(key, fallback)
}

/// [`translate_key`], rendering the result against template data.
pub fn translate_key_with(key: &str, fallback: &str, data: &TemplateData) -> String {
    Localization::get().translate_key_with(key, fallback, data)
}

/// Translate one of a message's plural forms, ngettext-style: `count`
/// picks the form under the active locale's plural rules.
pub fn translate_plural(key: &str, count: i64) -> String {
    Localization::get().translate_plural(key, count)
}

/// [`translate_plural`], rendering the result against template data.
pub fn translate_plural_with(key: &str, count: i64, data: &TemplateData) -> String {
    Localization::get().translate_plural_with(key, count, data)
}

/// Register a catalog whose locale is inferred from the resource name
/// (`base.fr.json` -> `fr`).
pub fn register_catalog(bytes: &[u8], source_name: &str) -> Result<(), I18nError> {
    Localization::get().register_catalog(bytes, source_name)
}

/// Register a catalog under an explicit locale tag.
pub fn register_catalog_for_locale(bytes: &[u8], locale: &LocaleTag) -> Result<(), I18nError> {
    Localization::get().register_catalog_for_locale(bytes, locale)
}

/// Override the process-wide active locale (tests, manual switching).
pub fn set_locale(locale: &str) {
    Localization::get().set_locale(locale);
}

/// The process-wide active locale.
pub fn current_locale() -> LocaleTag {
    Localization::get().current_locale()
}

/// Convenience macro over [`translate`]/[`translate_with`].
///
/// Examples:
/// - `tr!("Cancel")`
/// - `tr!("Hello, {name}!", { name: user_name })`
#[macro_export]
macro_rules! tr {
    ($text:expr) => {
        $crate::translate($text)
    };
    ($text:expr, { $($name:ident : $value:expr),* $(,)? }) => {
        $crate::translate_with($text, &$crate::args! { $($name : $value),* })
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // The global instance is shared across the test binary, so everything
    // touching it lives in this one test: unique keys, explicit locale.
    #[test]
    fn global_surface_round_trip() {
        set_locale("en");
        assert_eq!(current_locale(), LocaleTag::parse("en").unwrap());

        // Embedded toolkit strings resolve through the bootstrap path.
        assert_eq!(translate("menu.quit"), "Quit");
        assert_eq!(translate_key("dialog.cancel", "Cancel?"), "Cancel");

        // Unknown text comes back verbatim.
        assert_eq!(translate("Unmistakably untranslated"), "Unmistakably untranslated");

        register_catalog_for_locale(
            br#"{
                "globtest.greeting": "Hello, {name}!",
                "globtest.rows": { "one": "{count} row", "other": "{count} rows" }
            }"#,
            &LocaleTag::parse("en").unwrap(),
        )
        .unwrap();

        assert_eq!(
            tr!("globtest.greeting", { name: "Ada" }),
            "Hello, Ada!"
        );
        assert_eq!(translate_plural("globtest.rows", 1), "1 row");
        assert_eq!(translate_plural("globtest.rows", 5), "5 rows");

        // Registration overrides bundled text for the same key.
        register_catalog(br#"{"menu.quit": "Leave"}"#, "app.en.json").unwrap();
        assert_eq!(translate("menu.quit"), "Leave");
    }
}
