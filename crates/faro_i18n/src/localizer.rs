use intl_pluralrules::PluralCategory;
use tracing::debug;

use crate::args::TemplateData;
use crate::catalog::MessageEntry;
use crate::locale::{fallback_chain, LocaleTag};
use crate::plural::PluralSelector;
use crate::store::BundleStore;
use crate::template;

/// Why a lookup fell through to the fallback text. Consumed here and turned
/// into a plain string before the public boundary; callers only ever see a
/// rendered result.
#[derive(Debug)]
enum LookupFailure {
    MissingKey,
    MissingForm(PluralCategory),
}

/// Translates and renders one message per call against a snapshot of the
/// bundle store and an active locale.
///
/// Every call is pure and synchronous; no method returns an error. The
/// worst case is the caller's own fallback text, rendered as a template so
/// its placeholders still substitute.
pub struct Localizer<'a> {
    store: &'a BundleStore,
    active: LocaleTag,
    chain: Vec<LocaleTag>,
    plural: PluralSelector,
}

impl<'a> Localizer<'a> {
    pub fn new(store: &'a BundleStore, active: LocaleTag) -> Self {
        let chain = fallback_chain(&active, store.default_locale());
        let plural = PluralSelector::new(&active);
        Self {
            store,
            active,
            chain,
            plural,
        }
    }

    pub fn locale(&self) -> &LocaleTag {
        &self.active
    }

    /// gettext-style translation: the input is both lookup key and literal
    /// fallback text.
    pub fn localize(&self, text: &str) -> String {
        self.localize_key(text, text)
    }

    pub fn localize_with(&self, text: &str, data: &TemplateData) -> String {
        self.localize_key_with(text, text, data)
    }

    pub fn localize_key(&self, key: &str, fallback: &str) -> String {
        self.localize_key_with(key, fallback, &TemplateData::new())
    }

    pub fn localize_key_with(&self, key: &str, fallback: &str, data: &TemplateData) -> String {
        match self.lookup_text(key) {
            Ok(text) => template::render(key, text, data),
            Err(reason) => {
                debug!(
                    key,
                    locale = %self.active,
                    ?reason,
                    "translation lookup failed, using fallback text"
                );
                template::render_fallback(key, fallback, data)
            }
        }
    }

    /// ngettext-style translation: `count` selects the plural form under
    /// the active locale's rules; the key doubles as the literal fallback.
    ///
    /// With empty template data the count itself is exposed as `{count}`.
    pub fn localize_plural(&self, key: &str, count: i64) -> String {
        self.localize_plural_with(key, count, &TemplateData::new())
    }

    pub fn localize_plural_with(&self, key: &str, count: i64, data: &TemplateData) -> String {
        let category = self.plural.category_for(count);

        let counted;
        let data = if data.is_empty() {
            counted = TemplateData::new().arg("count", count);
            &counted
        } else {
            data
        };

        match self.lookup_plural(key, category) {
            Ok(text) => template::render(key, text, data),
            Err(reason) => {
                debug!(
                    key,
                    count,
                    locale = %self.active,
                    ?reason,
                    "plural lookup failed, using fallback text"
                );
                template::render_fallback(key, key, data)
            }
        }
    }

    fn lookup_text(&self, key: &str) -> Result<&str, LookupFailure> {
        for tag in &self.chain {
            if let Some(catalog) = self.store.catalog(tag) {
                if let Some(text) = catalog.text(key) {
                    return Ok(text);
                }
            }
        }
        Err(LookupFailure::MissingKey)
    }

    fn lookup_plural(&self, key: &str, category: PluralCategory) -> Result<&str, LookupFailure> {
        let mut saw_entry = false;
        for tag in &self.chain {
            let Some(catalog) = self.store.catalog(tag) else {
                continue;
            };
            match catalog.get(key) {
                // A plain-text message serves every count.
                Some(MessageEntry::Text(text)) => return Ok(text),
                Some(MessageEntry::Plural(forms)) => {
                    if let Some(text) = forms.form(&category).or(forms.other.as_deref()) {
                        return Ok(text);
                    }
                    saw_entry = true;
                }
                None => {}
            }
        }
        Err(if saw_entry {
            LookupFailure::MissingForm(category)
        } else {
            LookupFailure::MissingKey
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::args;

    fn store() -> BundleStore {
        let mut store = BundleStore::new(LocaleTag::parse("en").unwrap());
        store
            .add_catalog_for_locale(
                br#"{
                    "menu.quit": "Quit",
                    "greeting": "Hello, {name}!",
                    "picker.items_selected": {
                        "one": "{count} item selected",
                        "other": "{count} items selected"
                    },
                    "broken.plural": { "one": "just one" }
                }"#,
                &LocaleTag::parse("en").unwrap(),
            )
            .unwrap();
        store
            .add_catalog_for_locale(
                r#"{
                    "menu.quit": "Quitter",
                    "picker.items_selected": {
                        "one": "{count} élément sélectionné",
                        "other": "{count} éléments sélectionnés"
                    }
                }"#
                .as_bytes(),
                &LocaleTag::parse("fr").unwrap(),
            )
            .unwrap();
        store
    }

    fn localizer<'a>(store: &'a BundleStore, tag: &str) -> Localizer<'a> {
        Localizer::new(store, LocaleTag::parse(tag).unwrap())
    }

    #[test]
    fn stored_translation_returned_exactly() {
        let store = store();
        assert_eq!(localizer(&store, "en").localize("menu.quit"), "Quit");
        assert_eq!(localizer(&store, "fr").localize("menu.quit"), "Quitter");
    }

    #[test]
    fn region_variant_falls_back_to_language() {
        let store = store();
        assert_eq!(localizer(&store, "fr-CA").localize("menu.quit"), "Quitter");
    }

    #[test]
    fn unknown_locale_falls_back_to_default() {
        let store = store();
        assert_eq!(localizer(&store, "ja").localize("menu.quit"), "Quit");
    }

    #[test]
    fn missing_key_renders_fallback_template() {
        let store = store();
        let l = localizer(&store, "en");
        let out = l.localize_key_with("no.such.key", "Howdy, {name}!", &args! { name: "Ada" });
        assert_eq!(out, "Howdy, Ada!");

        // Idempotent: identical inputs, identical output.
        let again =
            l.localize_key_with("no.such.key", "Howdy, {name}!", &args! { name: "Ada" });
        assert_eq!(out, again);
    }

    #[test]
    fn missing_key_without_data_is_verbatim() {
        let store = store();
        let l = localizer(&store, "en");
        assert_eq!(l.localize_key("no.such.key", "Raw {text}"), "Raw {text}");
    }

    #[test]
    fn stored_template_renders_with_data() {
        let store = store();
        let l = localizer(&store, "en");
        assert_eq!(
            l.localize_with("greeting", &args! { name: "Grace" }),
            "Hello, Grace!"
        );
    }

    #[test]
    fn plural_selects_distinct_forms() {
        let store = store();
        let l = localizer(&store, "en");
        assert_eq!(
            l.localize_plural("picker.items_selected", 1),
            "1 item selected"
        );
        assert_eq!(
            l.localize_plural("picker.items_selected", 2),
            "2 items selected"
        );
    }

    #[test]
    fn plural_supplied_data_wins_over_count_injection() {
        let store = store();
        let l = localizer(&store, "en");
        assert_eq!(
            l.localize_plural_with("picker.items_selected", 2, &args! { count: "two" }),
            "two items selected"
        );
    }

    #[test]
    fn plural_without_matching_form_uses_other() {
        let store = store();
        // Korean resolves nothing here; the chain ends at the en catalog and
        // a count of 5 selects `other`.
        let l = localizer(&store, "en");
        assert_eq!(
            l.localize_plural("picker.items_selected", 0),
            "0 items selected"
        );
    }

    #[test]
    fn plural_entry_without_usable_form_falls_back() {
        let store = store();
        let l = localizer(&store, "en");
        // `broken.plural` defines only `one`; a count of 3 selects OTHER,
        // which is absent, so the key itself is the fallback.
        assert_eq!(l.localize_plural("broken.plural", 3), "broken.plural");
        assert_eq!(l.localize_plural("broken.plural", 1), "just one");
    }

    #[test]
    fn plural_on_plain_text_entry_serves_every_count() {
        let store = store();
        let l = localizer(&store, "en");
        assert_eq!(l.localize_plural("menu.quit", 3), "Quit");
    }

    #[test]
    fn plural_fallback_still_renders_count() {
        let store = store();
        let l = localizer(&store, "en");
        assert_eq!(
            l.localize_plural("{count} widgets", 7),
            "7 widgets"
        );
    }
}
