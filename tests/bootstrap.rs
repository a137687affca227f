//! Startup wiring against a settings file on disk.

use std::fs;

use glossa::i18n::{self, LOCALE_KEY, LocaleCode, StaticLanguages};
use glossa::paths;
use glossa::store::{PreferenceStore, SettingsFile};
use tempfile::TempDir;

fn settings_in(dir: &TempDir) -> SettingsFile {
    SettingsFile::new(paths::settings_path(&paths::config_dir(Some(dir.path()))))
}

/// What: A saved `locale = zh` picks the Chinese catalog with English fallback.
#[test]
fn saved_setting_selects_catalog() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
    let store = settings_in(&temp_dir);
    fs::write(store.path(), "locale = zh\n").expect("Failed to write test settings");

    let ctx = i18n::bootstrap(&store, &StaticLanguages::new(["en-US"]));
    assert_eq!(ctx.locale(), LocaleCode::Zh);
    assert_eq!(ctx.fallback_locale(), LocaleCode::En);
    assert_eq!(ctx.t("app.actions.cancel"), "取消");
}

/// What: Unknown saved values and no runtime tags degrade to English.
#[test]
fn garbage_setting_and_empty_environment_degrade_to_english() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
    let store = settings_in(&temp_dir);
    fs::write(store.path(), "locale = klingon\n").expect("Failed to write test settings");

    let ctx = i18n::bootstrap(&store, &StaticLanguages::default());
    assert_eq!(ctx.locale(), LocaleCode::En);
    assert_eq!(ctx.t("app.actions.cancel"), "Cancel");
    assert_eq!(ctx.t("no.such.key"), "no.such.key");
}

/// What: Every bundled key is translated in both locales.
#[test]
fn every_key_resolves_in_both_locales() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
    let store = settings_in(&temp_dir);
    let en = i18n::bootstrap(&store, &StaticLanguages::new(["en"]));
    let zh = en.with_locale(LocaleCode::Zh);
    for key in i18n::bundled_catalogs()[&LocaleCode::En].keys() {
        assert!(en.has_key(key));
        assert!(zh.has_key(key));
        assert_ne!(zh.t(key), *key);
    }
}

/// What: Changing locale writes the setting and a later start picks it up.
#[test]
fn change_locale_survives_restart() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
    let mut store = settings_in(&temp_dir);
    let languages = StaticLanguages::new(["zh-CN"]);

    let ctx = i18n::bootstrap(&store, &languages);
    assert_eq!(ctx.locale(), LocaleCode::Zh);

    let ctx = i18n::change_locale(&ctx, &mut store, LocaleCode::En).expect("save locale");
    assert_eq!(ctx.locale(), LocaleCode::En);
    assert_eq!(ctx.t_fmt1("cli.locale_saved", "English"), "Locale set to English");

    let saved = fs::read_to_string(store.path()).expect("read settings");
    assert!(saved.lines().any(|l| l == "locale = en"));
    assert_eq!(store.get(LOCALE_KEY), Some("en".to_string()));

    let restarted = i18n::bootstrap(&store, &languages);
    assert_eq!(restarted.locale(), LocaleCode::En);
}
