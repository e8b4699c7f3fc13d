use intl_pluralrules::{PluralCategory, PluralRuleType, PluralRules};
use tracing::warn;

use crate::locale::LocaleTag;

/// CLDR cardinal plural selection for one locale.
///
/// Rule construction tries the full tag, then its language subtag, then the
/// baseline `en`. A locale absent from the CLDR tables degrades to a crude
/// one/other split rather than failing the translation call.
pub struct PluralSelector {
    rules: Option<PluralRules>,
}

impl PluralSelector {
    pub fn new(locale: &LocaleTag) -> Self {
        let candidates = [locale.clone(), locale.language_only(), LocaleTag::baseline()];

        let mut rules = None;
        for tag in &candidates {
            match PluralRules::create(tag.lang_id().clone(), PluralRuleType::CARDINAL) {
                Ok(r) => {
                    rules = Some(r);
                    break;
                }
                Err(_) => continue,
            }
        }

        if rules.is_none() {
            warn!(locale = %locale, "no CLDR plural rules available");
        }
        Self { rules }
    }

    /// The plural category a count selects under this locale's rules.
    pub fn category_for(&self, count: i64) -> PluralCategory {
        match &self.rules {
            Some(rules) => rules.select(count).unwrap_or(PluralCategory::OTHER),
            None => {
                if count == 1 {
                    PluralCategory::ONE
                } else {
                    PluralCategory::OTHER
                }
            }
        }
    }
}
