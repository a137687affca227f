//! Startup wiring: resolve the locale and build the translation context.

use crate::i18n::catalog::bundled_catalogs;
use crate::i18n::context::TranslationContext;
use crate::i18n::detection::LanguagePreferences;
use crate::i18n::locale::LocaleCode;
use crate::i18n::resolver::{LOCALE_KEY, LocaleResolver};
use crate::store::{PreferenceStore, StoreError};

/// What: Resolve the locale once and build the application's translation context.
///
/// Inputs:
/// - `store`: Persisted preferences (read once, never written)
/// - `languages`: Runtime language preferences (read at most once)
///
/// Output:
/// - `TranslationContext` with the resolved locale, English as fallback and
///   the bundled catalogs
///
/// Details:
/// - Total: bad settings, odd language tags and broken catalogs all degrade
///   to English instead of failing
/// - Call once at startup and hand the result to consumers
#[must_use]
pub fn bootstrap(
    store: &dyn PreferenceStore,
    languages: &dyn LanguagePreferences,
) -> TranslationContext {
    let locale = LocaleResolver::new(store, languages).resolve();
    let ctx = TranslationContext::new(locale, LocaleCode::DEFAULT, bundled_catalogs());
    tracing::info!(
        locale = %ctx.locale(),
        fallback = %ctx.fallback_locale(),
        "translation context ready"
    );
    ctx
}

/// What: Persist a new locale choice and switch a context to it.
///
/// Inputs:
/// - `ctx`: Context currently in use
/// - `store`: Preference store to write the choice to
/// - `locale`: Newly chosen locale
///
/// Output:
/// - Context over the same catalogs with `locale` as current locale
///
/// # Errors
/// - Returns the store's error when the choice cannot be saved; `ctx` is
///   left as it was
pub fn change_locale(
    ctx: &TranslationContext,
    store: &mut dyn PreferenceStore,
    locale: LocaleCode,
) -> Result<TranslationContext, StoreError> {
    store.set(LOCALE_KEY, locale.as_str())?;
    tracing::info!(from = %ctx.locale(), to = %locale, "locale changed");
    Ok(ctx.with_locale(locale))
}
