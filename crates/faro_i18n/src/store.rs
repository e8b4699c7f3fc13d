use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use crate::catalog::MessageCatalog;
use crate::locale::LocaleTag;
use crate::I18nError;

/// Catalogs compiled into the toolkit for its stock UI strings.
///
/// File names follow the bundled-resource convention: a fixed `base.`
/// prefix, a locale tag, and a `.json` suffix.
const EMBEDDED_CATALOGS: &[(&str, &str)] = &[
    ("base.en.json", include_str!("translations/base.en.json")),
    ("base.de.json", include_str!("translations/base.de.json")),
    ("base.fr.json", include_str!("translations/base.fr.json")),
    ("base.ko.json", include_str!("translations/base.ko.json")),
];

/// Owns all parsed message catalogs, keyed by locale tag.
///
/// Populated once at startup from the embedded resources and extended at
/// runtime through explicit registration calls.
pub struct BundleStore {
    default_locale: LocaleTag,
    catalogs: HashMap<LocaleTag, MessageCatalog>,
}

impl BundleStore {
    /// An empty store rooted at a default locale.
    pub fn new(default_locale: LocaleTag) -> Self {
        Self {
            default_locale,
            catalogs: HashMap::new(),
        }
    }

    /// A store pre-populated with the compiled-in catalogs.
    ///
    /// A malformed embedded catalog is a packaging defect and fails the
    /// whole load.
    pub fn with_embedded(default_locale: LocaleTag) -> Result<Self, I18nError> {
        let mut store = Self::new(default_locale);
        for (name, contents) in EMBEDDED_CATALOGS {
            store.add_catalog(contents.as_bytes(), name)?;
            debug!(resource = name, "loaded bundled catalog");
        }
        Ok(store)
    }

    /// Parse one catalog and merge it in; the locale is inferred from the
    /// resource name (`base.fr.json` -> `fr`). Names without a recognizable
    /// locale segment feed the default/template locale.
    pub fn add_catalog(&mut self, bytes: &[u8], source_name: &str) -> Result<(), I18nError> {
        let tag = self.locale_from_name(source_name);
        self.insert_catalog(bytes, source_name, tag)
    }

    /// Parse one catalog and merge it in under an explicit locale tag.
    pub fn add_catalog_for_locale(
        &mut self,
        bytes: &[u8],
        locale: &LocaleTag,
    ) -> Result<(), I18nError> {
        self.insert_catalog(bytes, &locale.to_string(), locale.clone())
    }

    fn insert_catalog(
        &mut self,
        bytes: &[u8],
        source_name: &str,
        tag: LocaleTag,
    ) -> Result<(), I18nError> {
        let parsed = MessageCatalog::parse(bytes, source_name)?;
        match self.catalogs.entry(tag) {
            Entry::Occupied(mut existing) => existing.get_mut().merge(parsed),
            Entry::Vacant(slot) => {
                slot.insert(parsed);
            }
        }
        Ok(())
    }

    fn locale_from_name(&self, name: &str) -> LocaleTag {
        let stem = name.strip_suffix(".json").unwrap_or(name);
        if stem.contains("template") {
            return self.default_locale.clone();
        }

        let candidate = stem.rsplit('.').next().unwrap_or(stem);
        match LocaleTag::parse(candidate) {
            // A real language subtag is 2-3 characters; anything longer is a
            // bare resource name, not a locale segment.
            Ok(tag) if tag.language().len() <= 3 => tag,
            _ => self.default_locale.clone(),
        }
    }

    pub fn default_locale(&self) -> &LocaleTag {
        &self.default_locale
    }

    /// The locale tags currently holding a catalog.
    pub fn locales(&self) -> Vec<LocaleTag> {
        self.catalogs.keys().cloned().collect()
    }

    pub fn catalog(&self, locale: &LocaleTag) -> Option<&MessageCatalog> {
        self.catalogs.get(locale)
    }
}
