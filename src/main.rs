//! Glossa binary entrypoint: resolve the locale, optionally save a new one,
//! and print lookups from the bundled catalogs.

mod args;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use glossa::i18n::{
    self, LanguagePreferences, StaticLanguages, SystemLanguages, TranslationContext,
};
use glossa::paths;
use glossa::store::SettingsFile;
use serde::Serialize;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// JSON output for `--json`.
#[derive(Serialize)]
struct Report<'a> {
    /// Resolved current locale.
    locale: i18n::LocaleCode,
    /// Fallback locale.
    fallback_locale: i18n::LocaleCode,
    /// Requested keys and their text.
    lookups: Vec<Lookup<'a>>,
}

/// One looked-up key.
#[derive(Serialize)]
struct Lookup<'a> {
    /// Key as given on the command line.
    key: &'a str,
    /// Translated text, or the key itself when missing.
    text: String,
    /// Whether any catalog defines the key.
    found: bool,
}

/// What: Build the lookup list for the requested keys.
fn lookups<'a>(ctx: &TranslationContext, keys: &'a [String]) -> Vec<Lookup<'a>> {
    keys.iter()
        .map(|key| Lookup {
            key,
            text: ctx.t(key),
            found: ctx.has_key(key),
        })
        .collect()
}

/// What: Run the CLI against parsed arguments.
///
/// # Errors
/// - Saving `--set-locale` fails
/// - JSON serialization fails
fn run(args: &args::Args, store: &mut SettingsFile) -> Result<()> {
    let languages: Box<dyn LanguagePreferences> = if args.prefer.is_empty() {
        Box::new(SystemLanguages)
    } else {
        Box::new(StaticLanguages::new(args.prefer.iter().cloned()))
    };

    let mut ctx = i18n::bootstrap(&*store, languages.as_ref());

    if let Some(locale) = args.set_locale {
        ctx = i18n::change_locale(&ctx, store, locale)?;
        if !args.json {
            println!("{}", ctx.t_fmt1("cli.locale_saved", locale.display_name()));
        }
    }

    let lookups = lookups(&ctx, &args.lookup);
    if args.json {
        let report = Report {
            locale: ctx.locale(),
            fallback_locale: ctx.fallback_locale(),
            lookups,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}: {}", ctx.t("cli.current_locale"), ctx.locale());
    println!("{}: {}", ctx.t("cli.fallback_locale"), ctx.fallback_locale());
    for lookup in lookups {
        if lookup.found {
            println!("{} = {}", lookup.key, lookup.text);
        } else {
            println!("{} = {}", lookup.key, ctx.t_fmt1("cli.missing_key", lookup.key));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = args::Args::parse();
    let config_dir = paths::config_dir(args.config_dir.as_deref());
    logging::init(&paths::logs_dir(&config_dir), &args::determine_log_level(&args));

    let mut store = SettingsFile::new(paths::settings_path(&config_dir));
    tracing::info!(settings = %store.path().display(), "Glossa starting");
    match run(&args, &mut store) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Glossa failed");
            eprintln!("glossa: {err}");
            ExitCode::FAILURE
        }
    }
}
