//! Key-value preference storage used to persist user settings.

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::TomlPreferences;
pub use memory::MemoryPreferences;

/// Key under which the active locale tag is stored.
pub const LOCALE_KEY: &str = "locale";

/// Errors raised by a [`PreferenceStore`].
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Failed to access preferences file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preferences file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Preference storage unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Durable string key-value storage.
///
/// Implementations must be shareable across threads: the locale store may
/// write from a background thread while the UI thread reads.
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`. `Ok(None)` means absent.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}
