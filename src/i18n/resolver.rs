//! Startup locale resolution: persisted choice -> runtime preference -> default.

use crate::i18n::detection::LanguagePreferences;
use crate::i18n::locale::LocaleCode;
use crate::store::PreferenceStore;

/// Settings key holding the user's saved locale.
pub const LOCALE_KEY: &str = "locale";

/// What: Reduce a language tag to its lowercase primary language subtag.
///
/// Inputs:
/// - `tag`: Raw tag like `"zh-CN"`, `"ZH-tw"`
///
/// Output:
/// - Text before the first `-`, lowercased (`"zh"`, `"en"`)
///
/// Details:
/// - Only `-` separates subtags; POSIX forms like `zh_CN` are converted by
///   [`crate::i18n::SystemLanguages`] before they get here
#[must_use]
pub fn normalize_language_tag(tag: &str) -> String {
    tag.split('-')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// What: Accept a persisted value only if it is exactly a supported code.
///
/// Inputs:
/// - `persisted`: Value read from the preference store, if any
///
/// Output:
/// - `Some(LocaleCode)` for a supported code, `None` otherwise
///
/// Details:
/// - Unsupported values are ignored, not reported as errors
#[must_use]
pub fn locale_from_persisted(persisted: Option<&str>) -> Option<LocaleCode> {
    let value = persisted?;
    let locale = LocaleCode::from_code(value);
    if locale.is_none() {
        tracing::debug!(value, "ignoring unsupported persisted locale");
    }
    locale
}

/// What: Pick a locale from the runtime-reported preference list.
///
/// Inputs:
/// - `reported`: Ordered language tags, most preferred first
///
/// Output:
/// - `LocaleCode::Zh` when the first tag's language is `zh`, else the default
///
/// Details:
/// - Only the first entry is considered
/// - Deliberately a two-way decision: any language other than Chinese,
///   supported or not, yields the default
#[must_use]
pub fn locale_from_reported(reported: &[String]) -> LocaleCode {
    let Some(first) = reported.first() else {
        tracing::debug!(
            "no runtime language preferences, using default: {}",
            LocaleCode::DEFAULT
        );
        return LocaleCode::DEFAULT;
    };

    let language = normalize_language_tag(first);
    if language == LocaleCode::Zh.as_str() {
        LocaleCode::Zh
    } else {
        tracing::debug!(
            tag = %first,
            "runtime language is not Chinese, using default: {}",
            LocaleCode::DEFAULT
        );
        LocaleCode::DEFAULT
    }
}

/// What: Resolve the display locale from both inputs.
///
/// Inputs:
/// - `persisted`: Saved locale, if any
/// - `reported`: Runtime language preferences, most preferred first
///
/// Output:
/// - A supported `LocaleCode`; never fails
#[must_use]
pub fn resolve_locale(persisted: Option<&str>, reported: &[String]) -> LocaleCode {
    locale_from_persisted(persisted).unwrap_or_else(|| locale_from_reported(reported))
}

/// Resolver bound to a preference store and a language preference source.
pub struct LocaleResolver<'a> {
    store: &'a dyn PreferenceStore,
    languages: &'a dyn LanguagePreferences,
}

impl<'a> LocaleResolver<'a> {
    /// What: Create a resolver over the given collaborators.
    #[must_use]
    pub fn new(store: &'a dyn PreferenceStore, languages: &'a dyn LanguagePreferences) -> Self {
        Self { store, languages }
    }

    /// What: Resolve the locale to display.
    ///
    /// Output:
    /// - Supported `LocaleCode`
    ///
    /// Details:
    /// - Reads `LOCALE_KEY` from the store once; a supported value wins and
    ///   the runtime preferences are not consulted at all
    /// - Otherwise reads the runtime preferences once
    /// - Never writes to the store
    #[must_use]
    pub fn resolve(&self) -> LocaleCode {
        let persisted = self.store.get(LOCALE_KEY);
        if let Some(locale) = locale_from_persisted(persisted.as_deref()) {
            tracing::debug!(%locale, "using persisted locale");
            return locale;
        }
        let reported = self.languages.preferred_languages();
        let locale = locale_from_reported(&reported);
        tracing::debug!(%locale, reported = ?reported, "resolved locale from runtime preferences");
        locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::detection::StaticLanguages;
    use crate::store::MemoryStore;
    use std::cell::Cell;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    /// Counts how often the runtime list is read.
    struct CountingLanguages {
        calls: Cell<usize>,
        tags: Vec<String>,
    }

    impl LanguagePreferences for CountingLanguages {
        fn preferred_languages(&self) -> Vec<String> {
            self.calls.set(self.calls.get() + 1);
            self.tags.clone()
        }
    }

    /// What: Tags reduce to the lowercase text before the first hyphen.
    #[test]
    fn test_normalize_language_tag() {
        assert_eq!(normalize_language_tag("zh-CN"), "zh");
        assert_eq!(normalize_language_tag("ZH-tw"), "zh");
        assert_eq!(normalize_language_tag("zh"), "zh");
        assert_eq!(normalize_language_tag("zh_CN"), "zh_cn");
        assert_eq!(normalize_language_tag("zh-Hans-CN"), "zh");
        assert_eq!(normalize_language_tag(""), "");
    }

    /// What: A supported saved locale wins whatever the runtime list says.
    #[test]
    fn persisted_supported_locale_wins() {
        for &locale in LocaleCode::ALL {
            for reported in [tags(&[]), tags(&["zh-CN"]), tags(&["en-US"]), tags(&["fr"])] {
                assert_eq!(resolve_locale(Some(locale.as_str()), &reported), locale);
            }
        }
    }

    /// What: Unsupported or malformed saved values fall through to the runtime list.
    #[test]
    fn unsupported_persisted_value_falls_through() {
        for persisted in [None, Some("fr"), Some(""), Some("zh-CN"), Some("ZH"), Some(" en")] {
            assert_eq!(resolve_locale(persisted, &tags(&["zh-CN"])), LocaleCode::Zh);
            assert_eq!(resolve_locale(persisted, &tags(&["en-US"])), LocaleCode::En);
        }
    }

    /// What: A Chinese first runtime tag selects Chinese in any case or region.
    #[test]
    fn first_reported_chinese_tag_resolves_to_chinese() {
        for tag in ["zh", "zh-CN", "ZH-tw", "zh-Hans-CN"] {
            assert_eq!(resolve_locale(None, &tags(&[tag, "en-US"])), LocaleCode::Zh);
        }
    }

    /// What: Any other first runtime tag selects English, even when Chinese comes later.
    #[test]
    fn first_reported_non_chinese_tag_resolves_to_default() {
        for tag in ["fr-FR", "en-GB", "", "ja", "zhx", "-zh", "zh_CN"] {
            assert_eq!(resolve_locale(None, &tags(&[tag, "zh-CN"])), LocaleCode::En);
        }
    }

    /// What: No saved value and no runtime tags give the default locale.
    #[test]
    fn empty_inputs_resolve_to_default() {
        assert_eq!(resolve_locale(None, &[]), LocaleCode::DEFAULT);
    }

    /// What: A valid saved locale short-circuits before the runtime list is read.
    #[test]
    fn resolver_skips_runtime_read_when_persisted_is_valid() {
        let mut store = MemoryStore::new();
        store
            .set(LOCALE_KEY, "zh")
            .expect("memory store accepts locale");
        let languages = CountingLanguages {
            calls: Cell::new(0),
            tags: tags(&["en-US"]),
        };
        let resolver = LocaleResolver::new(&store, &languages);
        assert_eq!(resolver.resolve(), LocaleCode::Zh);
        assert_eq!(languages.calls.get(), 0);
    }

    /// What: An invalid saved locale costs exactly one runtime read.
    #[test]
    fn resolver_reads_runtime_once_when_persisted_invalid() {
        let mut store = MemoryStore::new();
        store
            .set(LOCALE_KEY, "fr")
            .expect("memory store accepts locale");
        let languages = CountingLanguages {
            calls: Cell::new(0),
            tags: tags(&["en-US"]),
        };
        let resolver = LocaleResolver::new(&store, &languages);
        assert_eq!(resolver.resolve(), LocaleCode::En);
        assert_eq!(languages.calls.get(), 1);
    }

    /// What: Repeated resolution gives the same answer and writes nothing.
    #[test]
    fn resolver_is_idempotent_and_read_only() {
        let store = MemoryStore::new();
        let languages = StaticLanguages::new(["zh-CN", "en-US"]);
        let resolver = LocaleResolver::new(&store, &languages);
        let first = resolver.resolve();
        let second = resolver.resolve();
        assert_eq!(first, LocaleCode::Zh);
        assert_eq!(first, second);
        assert_eq!(store.get(LOCALE_KEY), None);
    }
}
