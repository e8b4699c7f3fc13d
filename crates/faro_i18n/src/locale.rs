use std::fmt;
use std::str::FromStr;

use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::I18nError;

/// A language/region identifier (e.g. `en`, `fr-CA`), compared for catalog
/// lookup and preference ranking.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocaleTag(LanguageIdentifier);

impl LocaleTag {
    /// Parse a locale tag, normalizing to a canonical-ish form first.
    ///
    /// - Converts `_` to `-` (Android and POSIX often report `en_US`).
    /// - Trims whitespace.
    pub fn parse(s: &str) -> Result<Self, I18nError> {
        let norm = s.trim().replace('_', "-");
        if norm.is_empty() {
            return Err(I18nError::InvalidLocale(s.to_string()));
        }
        norm.parse::<LanguageIdentifier>()
            .map(Self)
            .map_err(|_| I18nError::InvalidLocale(s.to_string()))
    }

    /// The hard baseline every resolution path bottoms out at.
    pub fn baseline() -> Self {
        Self("en".parse().expect("baseline tag parses"))
    }

    /// The primary language subtag (`fr-CA` -> `fr`).
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    /// A copy of this tag reduced to its language subtag.
    pub fn language_only(&self) -> Self {
        Self(LanguageIdentifier::from_parts(
            self.0.language,
            None,
            None,
            &[],
        ))
    }

    /// Whether both tags share a primary language (`fr-CA` matches `fr`).
    pub fn matches_language(&self, other: &Self) -> bool {
        self.0.language == other.0.language
    }

    pub(crate) fn lang_id(&self) -> &LanguageIdentifier {
        &self.0
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for LocaleTag {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Lookup order for one translation request.
///
/// Example: active `ko-KR`, default `en` -> `[ko-KR, ko, en]`.
pub(crate) fn fallback_chain(active: &LocaleTag, default: &LocaleTag) -> Vec<LocaleTag> {
    let candidates = [
        active.clone(),
        active.language_only(),
        default.clone(),
        default.language_only(),
    ];

    let mut chain: Vec<LocaleTag> = Vec::with_capacity(candidates.len());
    for tag in candidates {
        if !chain.contains(&tag) {
            chain.push(tag);
        }
    }
    chain
}

/// The user's ranked locale preferences, most-preferred first.
///
/// Falls back to `[en]` when the OS reports nothing usable. That failure is
/// logged, never fatal.
pub fn system_locales() -> Vec<LocaleTag> {
    let mut out = Vec::new();
    for raw in sys_locale::get_locales() {
        match LocaleTag::parse(&raw) {
            Ok(tag) => out.push(tag),
            Err(_) => warn!(locale = %raw, "skipping unparsable system locale"),
        }
    }

    if out.is_empty() {
        warn!("no usable system locales reported, defaulting to en");
        out.push(LocaleTag::baseline());
    }
    out
}

/// Pick the best-supported locale for a ranked preference list.
///
/// For each preference in order: exact tag match first, then a
/// language-only match (`fr-CA` accepts a stored `fr`). First hit wins;
/// with no hit at all the store default applies.
pub(crate) fn closest_supported_locale(
    preferred: &[LocaleTag],
    available: &[LocaleTag],
    default: &LocaleTag,
) -> LocaleTag {
    for want in preferred {
        for have in available {
            if have == want {
                return have.clone();
            }
        }
        for have in available {
            if have.matches_language(want) {
                return have.clone();
            }
        }
    }
    default.clone()
}
