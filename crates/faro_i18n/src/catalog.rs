use std::collections::HashMap;

use intl_pluralrules::PluralCategory;
use serde::Deserialize;

use crate::I18nError;

const MAX_CATALOG_ENTRIES: usize = 10_000;

/// One message definition: a plain string, or a set of plural-form
/// variants selected by CLDR category.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MessageEntry {
    Text(String),
    Plural(PluralMessage),
}

/// Plural-form variants of a message.
///
/// `other` doubles as the base form: it serves non-plural lookups of the
/// key and any category the catalog leaves undefined. `description` and
/// `hash` are extraction-tool metadata the original catalog format carries;
/// they are accepted and ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluralMessage {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub zero: Option<String>,
    #[serde(default)]
    pub one: Option<String>,
    #[serde(default)]
    pub two: Option<String>,
    #[serde(default)]
    pub few: Option<String>,
    #[serde(default)]
    pub many: Option<String>,
    #[serde(default)]
    pub other: Option<String>,
}

impl PluralMessage {
    /// The variant stored for a category, if any.
    pub fn form(&self, category: &PluralCategory) -> Option<&str> {
        match category {
            PluralCategory::ZERO => self.zero.as_deref(),
            PluralCategory::ONE => self.one.as_deref(),
            PluralCategory::TWO => self.two.as_deref(),
            PluralCategory::FEW => self.few.as_deref(),
            PluralCategory::MANY => self.many.as_deref(),
            PluralCategory::OTHER => self.other.as_deref(),
        }
    }
}

/// Parsed messages for one locale, keyed by message id.
#[derive(Clone, Debug, Default)]
pub struct MessageCatalog {
    entries: HashMap<String, MessageEntry>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON catalog: an object mapping message id to either a plain
    /// string or a plural-form object.
    pub fn parse(bytes: &[u8], source_name: &str) -> Result<Self, I18nError> {
        let entries: HashMap<String, MessageEntry> =
            serde_json::from_slice(bytes).map_err(|source| I18nError::CatalogParse {
                name: source_name.to_string(),
                source,
            })?;

        if entries.len() > MAX_CATALOG_ENTRIES {
            return Err(I18nError::CatalogTooLarge {
                name: source_name.to_string(),
                max: MAX_CATALOG_ENTRIES,
            });
        }
        Ok(Self { entries })
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: MessageEntry) {
        self.entries.insert(key.into(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&MessageEntry> {
        self.entries.get(key)
    }

    /// The non-plural text of a message; a plural entry answers with its
    /// `other` form.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.entries.get(key)? {
            MessageEntry::Text(s) => Some(s),
            MessageEntry::Plural(p) => p.other.as_deref(),
        }
    }

    /// Merge another catalog into this one; incoming entries win per key.
    pub fn merge(&mut self, other: MessageCatalog) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
