//! Key-value persistence for user preferences.
//!
//! The resolver only reads from a [`PreferenceStore`]; writes come from the
//! change-locale path and the CLI.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Header written to a freshly created settings file.
const SETTINGS_HEADER: &str = "# Glossa settings\n# Lines are `key = value`; `#` and `//` start comments.\n";

/// Failure to persist a preference.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    Io {
        /// File that could not be accessed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Key or value cannot be represented in the store.
    InvalidEntry {
        /// Offending key.
        key: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to access {}: {source}", path.display())
            }
            Self::InvalidEntry { key, reason } => {
                write!(f, "invalid settings entry '{key}': {reason}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidEntry { .. } => None,
        }
    }
}

/// Read/write access to persisted preferences.
pub trait PreferenceStore {
    /// What: Read the value stored under `key`.
    ///
    /// Output:
    /// - `Some(value)` when present and non-empty, `None` otherwise
    fn get(&self, key: &str) -> Option<String>;

    /// What: Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// - `StoreError::InvalidEntry` when the key or value cannot be stored
    /// - `StoreError::Io` when the backing storage fails
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// What: Reject keys and values that would corrupt a line-based store.
fn validate_entry(key: &str, value: &str) -> Result<(), StoreError> {
    let reason = if key.trim().is_empty() {
        Some("key is empty")
    } else if key.contains('=') {
        Some("key contains '='")
    } else if key.contains(['\n', '\r']) || value.contains(['\n', '\r']) {
        Some("line breaks are not allowed")
    } else if value.contains(" #") || value.contains(" //") {
        Some("value would be read back as an inline comment")
    } else if value.trim() != value {
        Some("value has leading or trailing whitespace")
    } else {
        None
    };
    reason.map_or(Ok(()), |reason| {
        Err(StoreError::InvalidEntry {
            key: key.to_string(),
            reason,
        })
    })
}

/// In-process store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).filter(|v| !v.is_empty()).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_entry(key, value)?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `key = value` settings file on disk.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

/// What: Normalize a settings key for comparison.
///
/// Details:
/// - Lowercases and maps `.`, `-` and spaces to `_`, so `Locale`, `locale`
///   and `LOCALE` all match
fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Strip a trailing ` # ...` or ` // ...` comment from a value.
fn strip_inline_comment(value: &str) -> &str {
    let cut = [" #", " //"]
        .iter()
        .filter_map(|marker| value.find(marker))
        .min()
        .unwrap_or(value.len());
    value[..cut].trim()
}

/// What: Split a settings line into normalized key and raw value.
///
/// Output:
/// - `None` for blank lines, comments and lines without `=`
fn split_entry(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_value) = trimmed.split_once('=')?;
    Some((normalize_key(raw_key), raw_value.trim()))
}

impl SettingsFile {
    /// Store backed by the file at `path`. The file need not exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// What: Read the file, treating a missing file as empty.
    fn read(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl PreferenceStore for SettingsFile {
    /// Details:
    /// - The last matching line wins
    /// - Unreadable files are logged and treated as absent
    fn get(&self, key: &str) -> Option<String> {
        let content = match self.read() {
            Ok(content) => content?,
            Err(err) => {
                tracing::warn!(error = %err, "settings file unreadable");
                return None;
            }
        };
        let wanted = normalize_key(key);
        content
            .lines()
            .rev()
            .filter_map(split_entry)
            .find(|(k, _)| *k == wanted)
            .map(|(_, v)| strip_inline_comment(v).to_string())
            .filter(|v| !v.is_empty())
    }

    /// Details:
    /// - Rewrites matching lines in place and keeps every other line and comment
    /// - Appends the key when absent; seeds a new file with a short header
    /// - Creates the parent directory when needed
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_entry(key, value)?;
        let wanted = normalize_key(key);
        let entry = format!("{} = {value}", key.trim());

        let mut lines: Vec<String> = match self.read()? {
            Some(content) if !content.trim().is_empty() => {
                content.lines().map(ToString::to_string).collect()
            }
            _ => SETTINGS_HEADER.lines().map(ToString::to_string).collect(),
        };

        let mut replaced = false;
        for line in &mut lines {
            if split_entry(line).is_some_and(|(k, _)| k == wanted) {
                line.clone_from(&entry);
                replaced = true;
            }
        }
        if !replaced {
            lines.push(entry);
        }

        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let mut new_content = lines.join("\n");
        new_content.push('\n');
        fs::write(&self.path, new_content).map_err(io_err)?;
        tracing::debug!(path = %self.path.display(), key, "saved setting");
        Ok(())
    }
}
