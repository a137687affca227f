//! Internationalization (i18n) module for Glossa.
//!
//! This module decides which language the application displays and provides
//! translation lookup for it.
//!
//! # Overview
//!
//! - **Locale Detection**: Reads the host's ordered language preferences from
//!   `LANGUAGE`, `LC_ALL`, `LC_MESSAGES`, `LANG`, or the platform API
//! - **Locale Resolution**: Saved `locale` setting -> first runtime language -> English
//! - **Catalogs**: `locales/en.yml` and `locales/zh.yml`, embedded at build time
//!   and flattened into dot-notation keys
//! - **Lookup**: [`TranslationContext::t`] with fallback to English, then to the key itself
//!
//! Only `en` and `zh` are supported. A saved value must be exactly one of those
//! codes; anything else is ignored. From the runtime list only the first entry
//! counts, and only a Chinese first entry (`zh`, `zh-CN`, `ZH-tw`, ...) selects
//! Chinese.
//!
//! # Usage
//!
//! ```rust,no_run
//! use glossa::i18n::{self, SystemLanguages};
//! use glossa::store::SettingsFile;
//!
//! let store = SettingsFile::new("/home/me/.config/glossa/settings.conf");
//! let ctx = i18n::bootstrap(&store, &SystemLanguages);
//! println!("{}", ctx.t("app.settings.title"));
//! ```
//!
//! # Error Handling
//!
//! - Nothing in resolution or bootstrap fails; every bad input degrades to English
//! - Missing translation keys fall back to English, then return the key itself
//! - Only persisting a new choice ([`change_locale`]) can return an error

mod bootstrap;
mod catalog;
mod context;
mod detection;
mod locale;
mod resolver;
mod translations;

pub use bootstrap::{bootstrap, change_locale};
pub use catalog::{CatalogError, Catalogs, bundled_catalogs, parse_catalog};
pub use context::TranslationContext;
pub use detection::{LanguagePreferences, StaticLanguages, SystemLanguages, languages_from_env};
pub use locale::{LocaleCode, UnsupportedLocale};
pub use resolver::{
    LOCALE_KEY, LocaleResolver, locale_from_persisted, locale_from_reported,
    normalize_language_tag, resolve_locale,
};
pub use translations::{TranslationMap, translate, translate_with_fallback};
