//! The translation context handed to the rest of the application.

use std::sync::Arc;

use crate::i18n::catalog::Catalogs;
use crate::i18n::locale::LocaleCode;
use crate::i18n::translations::{TranslationMap, translate, translate_with_fallback};

/// Current locale, fallback locale and the catalogs to look strings up in.
///
/// Built once by [`crate::i18n::bootstrap()`] and passed to consumers by value or
/// reference. Catalogs are shared and never mutated; the only way to change
/// the current locale is [`TranslationContext::with_locale`], which returns a
/// new context over the same catalogs.
#[derive(Debug, Clone)]
pub struct TranslationContext {
    locale: LocaleCode,
    fallback: LocaleCode,
    catalogs: Arc<Catalogs>,
}

/// Shared empty catalog for locales without an entry.
fn empty_catalog() -> &'static TranslationMap {
    static EMPTY: std::sync::OnceLock<TranslationMap> = std::sync::OnceLock::new();
    EMPTY.get_or_init(TranslationMap::new)
}

impl TranslationContext {
    /// What: Assemble a context from its parts.
    ///
    /// Inputs:
    /// - `locale`: Current locale
    /// - `fallback`: Locale consulted for keys missing from `locale`
    /// - `catalogs`: Catalog per locale
    #[must_use]
    pub fn new(locale: LocaleCode, fallback: LocaleCode, catalogs: Catalogs) -> Self {
        Self {
            locale,
            fallback,
            catalogs: Arc::new(catalogs),
        }
    }

    /// Current locale.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        self.locale
    }

    /// Locale used for keys the current locale lacks.
    #[must_use]
    pub const fn fallback_locale(&self) -> LocaleCode {
        self.fallback
    }

    fn catalog(&self, locale: LocaleCode) -> &TranslationMap {
        self.catalogs.get(&locale).unwrap_or_else(|| empty_catalog())
    }

    /// What: Translate `key` for the current locale.
    ///
    /// Output:
    /// - Current-locale text, else fallback-locale text, else `key` itself
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        translate_with_fallback(key, self.catalog(self.locale), self.catalog(self.fallback))
    }

    /// What: Translate `key` and fill `{}` placeholders in order.
    ///
    /// Details:
    /// - First `{}` gets the first argument, and so on; surplus arguments are ignored
    /// - Placeholders without an argument stay as `{}`
    /// - Inserted text is never scanned for placeholders
    #[must_use]
    pub fn t_fmt(&self, key: &str, args: &[&dyn std::fmt::Display]) -> String {
        let template = self.t(key);
        let mut pieces = template.split("{}");
        let mut args = args.iter();
        let mut result = pieces.next().unwrap_or_default().to_string();
        for piece in pieces {
            match args.next() {
                Some(arg) => result.push_str(&arg.to_string()),
                None => result.push_str("{}"),
            }
            result.push_str(piece);
        }
        result
    }

    /// Single-argument form of [`Self::t_fmt`].
    #[must_use]
    pub fn t_fmt1<T: std::fmt::Display>(&self, key: &str, arg: T) -> String {
        self.t_fmt(key, &[&arg])
    }

    /// Whether either the current or the fallback catalog defines `key`.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        translate(key, self.catalog(self.locale)).is_some()
            || translate(key, self.catalog(self.fallback)).is_some()
    }

    /// What: Same catalogs and fallback, different current locale.
    #[must_use]
    pub fn with_locale(&self, locale: LocaleCode) -> Self {
        Self {
            locale,
            fallback: self.fallback,
            catalogs: Arc::clone(&self.catalogs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_context(locale: LocaleCode) -> TranslationContext {
        let mut en = TranslationMap::new();
        en.insert("app.title".to_string(), "Language".to_string());
        en.insert("app.only_en".to_string(), "English only".to_string());
        en.insert("app.saved".to_string(), "Saved {} of {}".to_string());
        let mut zh = TranslationMap::new();
        zh.insert("app.title".to_string(), "语言".to_string());
        zh.insert("app.saved".to_string(), "已保存 {}/{}".to_string());

        let mut catalogs = Catalogs::new();
        catalogs.insert(LocaleCode::En, en);
        catalogs.insert(LocaleCode::Zh, zh);
        TranslationContext::new(locale, LocaleCode::En, catalogs)
    }

    /// What: Keys present in the current catalog come from it.
    #[test]
    fn lookup_prefers_current_locale() {
        let ctx = sample_context(LocaleCode::Zh);
        assert_eq!(ctx.t("app.title"), "语言");
    }

    /// What: Missing keys use the fallback catalog, then the key itself.
    #[test]
    fn lookup_falls_back_then_returns_key() {
        let ctx = sample_context(LocaleCode::Zh);
        assert_eq!(ctx.t("app.only_en"), "English only");
        assert_eq!(ctx.t("app.nope"), "app.nope");
        assert!(ctx.has_key("app.only_en"));
        assert!(!ctx.has_key("app.nope"));
    }

    /// What: Placeholders are filled left to right; missing arguments leave `{}`.
    #[test]
    fn t_fmt_fills_placeholders_in_order() {
        let ctx = sample_context(LocaleCode::En);
        assert_eq!(ctx.t_fmt("app.saved", &[&1, &3]), "Saved 1 of 3");
        assert_eq!(ctx.t_fmt1("app.saved", "x"), "Saved x of {}");
    }

    /// What: Arguments containing `{}` are inserted literally and extra arguments are dropped.
    #[test]
    fn t_fmt_does_not_rescan_inserted_text() {
        let ctx = sample_context(LocaleCode::En);
        assert_eq!(ctx.t_fmt("app.saved", &[&"{}", &"zh"]), "Saved {} of zh");
        assert_eq!(
            ctx.t_fmt("app.saved", &[&"{}", &"{}", &"extra"]),
            "Saved {} of {}"
        );
        assert_eq!(ctx.t_fmt("app.title", &[&"ignored"]), "Language");
    }

    /// What: A one-placeholder bundled message ignores surplus arguments.
    #[test]
    fn t_fmt_surplus_arguments_on_bundled_catalog() {
        let ctx = TranslationContext::new(
            LocaleCode::En,
            LocaleCode::En,
            crate::i18n::bundled_catalogs(),
        );
        assert_eq!(
            ctx.t_fmt("cli.locale_saved", &[&"{}", &"zh"]),
            "Locale set to {}"
        );
    }

    /// What: A context without catalogs returns keys unchanged.
    #[test]
    fn missing_catalog_degrades_to_key() {
        let ctx = TranslationContext::new(LocaleCode::Zh, LocaleCode::En, Catalogs::new());
        assert_eq!(ctx.t("app.title"), "app.title");
    }

    /// What: Switching locale shares catalogs and keeps the fallback.
    #[test]
    fn with_locale_keeps_catalogs_and_fallback() {
        let en = sample_context(LocaleCode::En);
        let zh = en.with_locale(LocaleCode::Zh);
        assert_eq!(zh.locale(), LocaleCode::Zh);
        assert_eq!(zh.fallback_locale(), LocaleCode::En);
        assert_eq!(zh.t("app.title"), "语言");
        assert_eq!(en.t("app.title"), "Language");
        assert!(Arc::ptr_eq(&en.catalogs, &zh.catalogs));
    }
}
