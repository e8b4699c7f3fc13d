use std::sync::{OnceLock, RwLock};

use tracing::{debug, warn};

use crate::args::TemplateData;
use crate::locale::{closest_supported_locale, system_locales, LocaleTag};
use crate::localizer::Localizer;
use crate::store::BundleStore;
use crate::I18nError;

/// Global localization singleton, lazily bootstrapped on first use.
static LOCALIZATION: OnceLock<Localization> = OnceLock::new();

/// Process-wide localization state: the bundle store plus the active
/// locale.
///
/// Reads may run in parallel from any thread; catalog registration and
/// locale overrides take the write side and block readers only for the
/// duration of the merge. Construct one explicitly for tests or embedders,
/// or reach the shared instance through [`Localization::get`].
pub struct Localization {
    store: RwLock<BundleStore>,
    active: RwLock<LocaleTag>,
}

impl Localization {
    /// An empty instance rooted at a default locale, with that locale
    /// active. No catalogs are loaded.
    pub fn new(default_locale: LocaleTag) -> Self {
        let active = default_locale.clone();
        Self {
            store: RwLock::new(BundleStore::new(default_locale)),
            active: RwLock::new(active),
        }
    }

    /// Full startup sequence: load the embedded catalogs, then intersect
    /// the user's ranked locale preferences with the loaded tags to pick
    /// the active locale.
    ///
    /// Fails only on a malformed embedded catalog, which is a packaging
    /// defect.
    pub fn bootstrap() -> Result<Self, I18nError> {
        let default_locale = LocaleTag::baseline();
        let store = BundleStore::with_embedded(default_locale.clone())?;

        let preferred = system_locales();
        let active = closest_supported_locale(&preferred, &store.locales(), &default_locale);
        debug!(locale = %active, "resolved startup locale");

        Ok(Self {
            store: RwLock::new(store),
            active: RwLock::new(active),
        })
    }

    /// The shared instance, bootstrapping it on first use.
    pub fn get() -> &'static Localization {
        LOCALIZATION.get_or_init(|| {
            Localization::bootstrap().expect("bundled translation catalogs are malformed")
        })
    }

    pub fn current_locale(&self) -> LocaleTag {
        self.active.read().unwrap().clone()
    }

    /// Override the active locale (tests, manual switching). Unparsable
    /// input is ignored with a log line.
    pub fn set_locale(&self, locale: &str) {
        match LocaleTag::parse(locale) {
            Ok(tag) => {
                let mut current = self.active.write().unwrap();
                if *current == tag {
                    return;
                }
                debug!(from = %*current, to = %tag, "switching locale");
                *current = tag;
            }
            Err(_) => warn!(locale, "ignoring invalid locale override"),
        }
    }

    /// Parse and merge a catalog; the locale comes from the resource name.
    pub fn register_catalog(&self, bytes: &[u8], source_name: &str) -> Result<(), I18nError> {
        self.store.write().unwrap().add_catalog(bytes, source_name)
    }

    /// Parse and merge a catalog under an explicit locale tag.
    pub fn register_catalog_for_locale(
        &self,
        bytes: &[u8],
        locale: &LocaleTag,
    ) -> Result<(), I18nError> {
        self.store
            .write()
            .unwrap()
            .add_catalog_for_locale(bytes, locale)
    }

    pub fn translate(&self, text: &str) -> String {
        self.translate_key(text, text)
    }

    pub fn translate_with(&self, text: &str, data: &TemplateData) -> String {
        self.translate_key_with(text, text, data)
    }

    pub fn translate_key(&self, key: &str, fallback: &str) -> String {
        let store = self.store.read().unwrap();
        Localizer::new(&store, self.current_locale()).localize_key(key, fallback)
    }

    pub fn translate_key_with(&self, key: &str, fallback: &str, data: &TemplateData) -> String {
        let store = self.store.read().unwrap();
        Localizer::new(&store, self.current_locale()).localize_key_with(key, fallback, data)
    }

    pub fn translate_plural(&self, key: &str, count: i64) -> String {
        let store = self.store.read().unwrap();
        Localizer::new(&store, self.current_locale()).localize_plural(key, count)
    }

    pub fn translate_plural_with(&self, key: &str, count: i64, data: &TemplateData) -> String {
        let store = self.store.read().unwrap();
        Localizer::new(&store, self.current_locale()).localize_plural_with(key, count, data)
    }
}
