//! Translation map and lookup utilities.

use std::collections::HashMap;

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<String, String>;

/// What: Look up a translation in a single catalog.
///
/// Output:
/// - `Some(&str)` when the key exists, `None` otherwise
#[must_use]
pub fn translate<'a>(key: &str, translations: &'a TranslationMap) -> Option<&'a str> {
    translations.get(key).map(String::as_str)
}

/// What: Look up a translation, falling back to a second catalog.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `translations`: Catalog of the current locale
/// - `fallback_translations`: Catalog of the fallback locale
///
/// Output:
/// - Text from the primary catalog, else the fallback, else the key itself
///
/// Details:
/// - Missing keys are logged at debug level only; callers never see an error
#[must_use]
pub fn translate_with_fallback(
    key: &str,
    translations: &TranslationMap,
    fallback_translations: &TranslationMap,
) -> String {
    if let Some(translation) = translate(key, translations) {
        return translation.to_string();
    }

    if let Some(translation) = translate(key, fallback_translations) {
        tracing::debug!(
            "Translation key '{}' not found in primary locale, using fallback",
            key
        );
        return translation.to_string();
    }

    tracing::debug!("Missing translation key: '{}'. Returning key as-is.", key);
    key.to_string()
}
