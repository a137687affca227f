//! Bundled message catalogs and YAML catalog parsing.

use std::collections::HashMap;
use std::fmt;

use crate::i18n::locale::LocaleCode;
use crate::i18n::translations::TranslationMap;

/// One catalog per supported locale.
pub type Catalogs = HashMap<LocaleCode, TranslationMap>;

const EN_CATALOG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/en.yml"));
const ZH_CATALOG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/zh.yml"));

/// Failure to turn catalog text into a `TranslationMap`.
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog text was empty or whitespace only.
    Empty,
    /// YAML syntax error.
    Yaml(serde_norway::Error),
    /// Top level of the document is not a mapping.
    NotAMapping,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "catalog is empty"),
            Self::Yaml(err) => write!(f, "failed to parse catalog YAML: {err}"),
            Self::NotAMapping => write!(f, "catalog root must be a mapping"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Yaml(err) => Some(err),
            Self::Empty | Self::NotAMapping => None,
        }
    }
}

impl From<serde_norway::Error> for CatalogError {
    fn from(value: serde_norway::Error) -> Self {
        Self::Yaml(value)
    }
}

/// Raw YAML text bundled for `locale`.
const fn bundled_source(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => EN_CATALOG,
        LocaleCode::Zh => ZH_CATALOG,
    }
}

/// What: Build the catalog set from the files embedded at compile time.
///
/// Output:
/// - `Catalogs` with an entry for every `LocaleCode::ALL` member
///
/// Details:
/// - The set of locales is closed; nothing is discovered at runtime
/// - A catalog that fails to parse is logged and replaced by an empty map so
///   lookups degrade to the fallback locale instead of failing
#[must_use]
pub fn bundled_catalogs() -> Catalogs {
    LocaleCode::ALL
        .iter()
        .map(|&locale| {
            let map = parse_catalog(bundled_source(locale)).unwrap_or_else(|err| {
                tracing::warn!(%locale, error = %err, "bundled catalog unusable, using empty catalog");
                TranslationMap::new()
            });
            tracing::debug!(%locale, keys = map.len(), "loaded bundled catalog");
            (locale, map)
        })
        .collect()
}

/// What: Parse catalog YAML into a flat `TranslationMap`.
///
/// Inputs:
/// - `yaml_content`: Catalog text with a single top-level locale key
///
/// Output:
/// - Dot-notation keys mapped to strings
///
/// # Errors
/// - `CatalogError::Empty` for blank input
/// - `CatalogError::Yaml` for invalid YAML
/// - `CatalogError::NotAMapping` when the root is not a mapping
///
/// Details:
/// - The top-level key (e.g. `en:`) is skipped; everything below is flattened
///   as `app.title`, `app.settings.language`, ...
pub fn parse_catalog(yaml_content: &str) -> Result<TranslationMap, CatalogError> {
    if yaml_content.trim().is_empty() {
        return Err(CatalogError::Empty);
    }
    let doc: serde_norway::Value = serde_norway::from_str(yaml_content)?;
    let root = doc.as_mapping().ok_or(CatalogError::NotAMapping)?;

    let mut translations = TranslationMap::new();
    for (_locale_key, locale_value) in root {
        flatten_yaml_value(locale_value, "", &mut translations);
    }
    Ok(translations)
}

/// What: Recursively flatten a YAML value into dot-notation keys.
///
/// Details:
/// - Sequences are stored as their YAML text
/// - Numbers and booleans are stored as their string form; nulls are skipped
fn flatten_yaml_value(
    value: &serde_norway::Value,
    prefix: &str,
    translations: &mut TranslationMap,
) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                if let Some(key_str) = key.as_str() {
                    let new_prefix = if prefix.is_empty() {
                        key_str.to_string()
                    } else {
                        format!("{prefix}.{key_str}")
                    };
                    flatten_yaml_value(val, &new_prefix, translations);
                }
            }
        }
        serde_norway::Value::String(s) => {
            translations.insert(prefix.to_string(), s.clone());
        }
        serde_norway::Value::Sequence(_) => {
            if let Ok(yaml_str) = serde_norway::to_string(value) {
                translations.insert(prefix.to_string(), yaml_str.trim().to_string());
            }
        }
        serde_norway::Value::Number(n) => {
            translations.insert(prefix.to_string(), n.to_string());
        }
        serde_norway::Value::Bool(b) => {
            translations.insert(prefix.to_string(), b.to_string());
        }
        _ => {}
    }
}
