//! TOML-file backed preference storage.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use toml::{Table, Value};

use super::{PreferenceError, PreferenceStore};

/// Table holding the string preferences inside the file.
const PREFERENCES_TABLE: &str = "preferences";

/// Preference store persisted as a TOML file.
///
/// Values live in a `[preferences]` table. Other tables in the file are
/// left untouched on write, so the file can be shared with other settings.
///
/// Writes take an exclusive advisory lock on a sibling `.lock` file and
/// replace the file through a rename, so readers never see a partial write.
#[derive(Debug, Clone)]
pub struct TomlPreferences {
    path: PathBuf,
}

impl TomlPreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<config_dir>/anylocale/preferences.toml`.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("anylocale").join("preferences.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Load the whole document. A missing file is an empty document.
    fn read_document(&self) -> Result<Table, PreferenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Table::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        toml::from_str::<Table>(&content).map_err(|source| PreferenceError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn lock(&self) -> Result<File, PreferenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(sibling(&self.path, "lock"))
            .map_err(|e| self.io_error(e))?;
        lock_file.lock_exclusive().map_err(|e| self.io_error(e))?;
        Ok(lock_file)
    }

    fn write_document(&self, document: &Table) -> Result<(), PreferenceError> {
        let content = toml::to_string(document)?;
        replace_contents(&self.path, &content).map_err(|e| self.io_error(e))
    }
}

impl PreferenceStore for TomlPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let document = self.read_document()?;
        let value = document
            .get(PREFERENCES_TABLE)
            .and_then(Value::as_table)
            .and_then(|table| table.get(key))
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // Held until the end of the read-modify-write cycle.
        let _lock = self.lock()?;

        let mut document = self.read_document()?;
        let table = document
            .entry(PREFERENCES_TABLE)
            .or_insert(Value::Table(Table::new()));

        match table {
            Value::Table(table) => {
                table.insert(key.to_string(), Value::String(value.to_string()));
            }
            other => {
                return Err(PreferenceError::Unavailable {
                    reason: format!(
                        "'{}' in {} is a {}, not a table",
                        PREFERENCES_TABLE,
                        self.path.display(),
                        other.type_str()
                    ),
                });
            }
        }

        self.write_document(&document)
    }
}

/// Write `content` to a temporary sibling and rename it over `path`.
/// The temporary file is removed again if any step fails.
fn replace_contents(path: &Path, content: &str) -> std::io::Result<()> {
    let tmp_path = sibling(path, "tmp");
    let result = File::create(&tmp_path)
        .and_then(|mut tmp| {
            tmp.write_all(content.as_bytes())?;
            tmp.sync_all()
        })
        .and_then(|_| fs::rename(&tmp_path, path));

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

/// `prefs.toml` -> `prefs.toml.<suffix>`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
