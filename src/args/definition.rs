//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;
use glossa::i18n::LocaleCode;

/// Glossa - resolve the display language and look up bundled translations
#[derive(Parser, Debug)]
#[command(name = "glossa")]
#[command(version)]
#[command(about = "Resolve the display language and look up bundled translations", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration directory holding settings.conf and logs/ (default: ~/.config/glossa)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Use these language tags instead of the system's preferences (e.g., --prefer zh-CN en-US)
    #[arg(long, num_args = 1..)]
    pub prefer: Vec<String>,

    /// Save a locale choice (en or zh) and switch to it
    #[arg(long)]
    pub set_locale: Option<LocaleCode>,

    /// Translation keys to look up (e.g., -k app.settings.title)
    #[arg(short = 'k', long = "lookup", num_args = 1..)]
    pub lookup: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
