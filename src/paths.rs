//! Configuration directory resolution.

use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the XDG base directories.
const APP_DIR: &str = "glossa";

/// What: Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// What: Directory holding `settings.conf` and `logs/`.
///
/// Inputs:
/// - `override_dir`: Explicit directory (e.g. `--config-dir`), used as-is when given
///
/// Output:
/// - `override_dir`, else `$XDG_CONFIG_HOME/glossa`, else `$HOME/.config/glossa`
#[must_use]
pub fn config_dir(override_dir: Option<&Path>) -> PathBuf {
    override_dir.map_or_else(
        || xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR),
        Path::to_path_buf,
    )
}

/// Path of the settings file inside `config_dir`.
#[must_use]
pub fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join("settings.conf")
}

/// Path of the log directory inside `config_dir`.
#[must_use]
pub fn logs_dir(config_dir: &Path) -> PathBuf {
    config_dir.join("logs")
}
