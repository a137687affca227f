//! Supported locale codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display languages the application ships catalogs for.
///
/// Any locale leaving the resolver is one of these variants; raw strings from
/// settings or the environment are narrowed to this set before use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// English (`en`), also the default and fallback locale.
    #[default]
    En,
    /// Chinese (`zh`).
    Zh,
}

impl LocaleCode {
    /// All supported locales in display order.
    pub const ALL: &'static [Self] = &[Self::En, Self::Zh];

    /// Locale used when nothing better can be determined.
    pub const DEFAULT: Self = Self::En;

    /// What: Return the short code used in settings files and catalogs.
    ///
    /// Output:
    /// - `"en"` or `"zh"`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// What: Look up a supported locale by its exact code.
    ///
    /// Inputs:
    /// - `code`: Raw code such as `"zh"`
    ///
    /// Output:
    /// - `Some(LocaleCode)` when `code` is exactly a supported code, `None` otherwise
    ///
    /// Details:
    /// - Membership test only: no trimming, case folding or region stripping.
    ///   `"zh-CN"` and `"ZH"` are not members.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_str() == code)
    }

    /// Native name of the language, for language pickers.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
        }
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLocale(pub String);

impl fmt::Display for UnsupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let supported: Vec<&str> = LocaleCode::ALL.iter().map(|l| l.as_str()).collect();
        write!(
            f,
            "unsupported locale '{}' (supported: {})",
            self.0,
            supported.join(", ")
        )
    }
}

impl std::error::Error for UnsupportedLocale {}

impl FromStr for LocaleCode {
    type Err = UnsupportedLocale;

    /// Strict parse for explicit user input (CLI, settings UI).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim()).ok_or_else(|| UnsupportedLocale(s.to_string()))
    }
}
