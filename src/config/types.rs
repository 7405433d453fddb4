use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::{SupportedLocales, UnknownLocalePolicy};
use crate::locale::Locale;
use crate::preferences::TomlPreferences;
use crate::store::{PersistMode, StoreOptions};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub persistence: PersistenceConfig,
}

/// Locale resolution settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Locale used when no preference is stored (default: "en").
    #[serde(default = "default_fallback")]
    pub fallback: Locale,
    /// Locales offered by the language picker, in display order.
    #[serde(default)]
    pub supported: SupportedLocales,
    /// Policy for tags outside `supported` (default: warn).
    #[serde(default)]
    pub unknown: UnknownLocalePolicy,
}

/// Where and how the locale preference is written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistenceConfig {
    #[serde(default)]
    pub mode: PersistMode,
    /// Preferences file (default: `<config_dir>/anylocale/preferences.toml`).
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
            supported: SupportedLocales::default(),
            unknown: UnknownLocalePolicy::default(),
        }
    }
}

impl PersistenceConfig {
    pub fn preferences_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(TomlPreferences::default_path)
    }
}

impl Config {
    /// Options for a [`LocaleStore`](crate::LocaleStore) built from this config.
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            fallback: self.locale.fallback.clone(),
            supported: self.locale.supported.clone(),
            unknown: self.locale.unknown,
            persist: self.persistence.mode,
        }
    }
}

fn default_fallback() -> Locale {
    Locale::fallback()
}
