use std::collections::HashMap;

use parking_lot::RwLock;

use super::{PreferenceError, PreferenceStore};

/// Volatile preference store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let values = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RwLock::new(values),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
