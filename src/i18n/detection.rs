//! Runtime language preference detection.

use std::env;

/// Source of the host's ordered language preferences.
///
/// Implementations return raw tags (e.g. `"zh-CN"`, `"en-US"`), most preferred
/// first. The list may be empty. Tags are not validated here.
pub trait LanguagePreferences {
    /// What: Return the host's preferred language tags in priority order.
    fn preferred_languages(&self) -> Vec<String>;
}

/// Language preferences reported by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLanguages;

impl LanguagePreferences for SystemLanguages {
    /// Details:
    /// - Environment variables first (see [`languages_from_env`])
    /// - Falls back to the platform API via `sys-locale` when the environment is silent
    fn preferred_languages(&self) -> Vec<String> {
        let from_env = languages_from_env(|name| env::var(name).ok());
        if !from_env.is_empty() {
            tracing::debug!(languages = ?from_env, "language preferences from environment");
            return from_env;
        }
        let from_os: Vec<String> = sys_locale::get_locales().collect();
        tracing::debug!(languages = ?from_os, "language preferences from platform");
        from_os
    }
}

/// A fixed preference list, e.g. supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLanguages(pub Vec<String>);

impl StaticLanguages {
    /// Build from anything that yields string-like tags.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }
}

impl LanguagePreferences for StaticLanguages {
    fn preferred_languages(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// What: Collect language preferences from locale environment variables.
///
/// Inputs:
/// - `lookup`: Variable reader (normally `std::env::var(..).ok()`)
///
/// Output:
/// - Ordered list of tags like `"zh-CN"`; empty when nothing usable is set
///
/// Details:
/// - `LANGUAGE` is a colon-separated priority list and comes first
/// - Then the first usable value of `LC_ALL`, `LC_MESSAGES`, `LANG`
/// - `C`/`POSIX` and empty values are skipped
/// - Duplicates keep their first position
pub fn languages_from_env<F>(lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut languages: Vec<String> = Vec::new();
    let mut push = |tag: String| {
        if !languages.contains(&tag) {
            languages.push(tag);
        }
    };

    if let Some(list) = lookup("LANGUAGE") {
        for entry in list.split(':') {
            if let Some(tag) = parse_locale_string(entry) {
                push(tag);
            }
        }
    }

    for var_name in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Some(value) = lookup(var_name)
            && let Some(tag) = parse_locale_string(&value)
        {
            push(tag);
            break;
        }
    }

    languages
}

/// What: Convert a POSIX locale string into a BCP 47 style tag.
///
/// Inputs:
/// - `locale_str`: Value like `"zh_CN.UTF-8"`, `"de_DE@euro"`, `"en-US"`
///
/// Output:
/// - `Some("zh-CN")` style tag, or `None` for empty, `C` and `POSIX` values
///
/// Details:
/// - Drops the encoding (`.UTF-8`) and modifier (`@euro`) suffixes
/// - Underscores become hyphens; language lowercased, region uppercased
/// - Script subtags (four letters) keep title case
fn parse_locale_string(locale_str: &str) -> Option<String> {
    let trimmed = locale_str.trim();
    let locale_part = trimmed.split(['.', '@']).next()?.trim();
    if locale_part.is_empty()
        || locale_part.eq_ignore_ascii_case("c")
        || locale_part.eq_ignore_ascii_case("posix")
    {
        return None;
    }

    let normalized = locale_part.replace('_', "-");
    let mut parts = normalized.split('-').filter(|p| !p.is_empty());
    let language = parts.next()?.to_lowercase();
    let mut tag = language;
    for part in parts {
        tag.push('-');
        if part.len() == 4 {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                tag.extend(first.to_uppercase());
                tag.push_str(&chars.as_str().to_lowercase());
            }
        } else {
            tag.push_str(&part.to_uppercase());
        }
    }
    Some(tag)
}
