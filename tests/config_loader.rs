use std::fs;
use std::path::PathBuf;

use anylocale::config::{Config, ConfigError};
use anylocale::{Locale, PersistMode, UnknownLocalePolicy};
use tempfile::TempDir;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.locale.fallback, Locale::fallback());
    assert_eq!(config.locale.unknown, UnknownLocalePolicy::Warn);
    assert_eq!(config.locale.supported.options().len(), 8);
    assert_eq!(config.persistence.mode, PersistMode::Background);
    assert!(config.persistence.path.is_none());
    assert!(config
        .persistence
        .preferences_path()
        .ends_with("anylocale/preferences.toml"));
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("anylocale/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_config_parses() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[locale]
fallback = "de"
unknown = "reject"

[[locale.supported]]
tag = "de"
native_name = "Deutsch"

[[locale.supported]]
tag = "fr"
native_name = "Français"

[persistence]
mode = "inline"
path = "/tmp/anylocale-test/prefs.toml"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.locale.fallback.as_str(), "de");
    assert_eq!(config.locale.unknown, UnknownLocalePolicy::Reject);
    assert_eq!(config.locale.supported.options().len(), 2);
    assert_eq!(config.persistence.mode, PersistMode::Inline);
    assert_eq!(
        config.persistence.preferences_path(),
        PathBuf::from("/tmp/anylocale-test/prefs.toml")
    );

    let options = config.store_options();
    assert_eq!(options.fallback.as_str(), "de");
    assert_eq!(options.unknown, UnknownLocalePolicy::Reject);
    assert_eq!(options.persist, PersistMode::Inline);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[persistence]\nmode = \"inline\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.persistence.mode, PersistMode::Inline);
    assert_eq!(config.locale, Config::default().locale);
}

#[test]
fn test_empty_fallback_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[locale]\nfallback = \"\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_unknown_policy_value_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[locale]\nunknown = \"sometimes\"\n").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_validation_fails_empty_supported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[locale]\nsupported = []\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("At least one supported locale"));
}

#[test]
fn test_validation_fails_duplicate_supported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[[locale.supported]]
tag = "fr"
native_name = "Français"

[[locale.supported]]
tag = "fr"
native_name = "French"
"#,
    )
    .unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("'fr' is listed twice"));
}
