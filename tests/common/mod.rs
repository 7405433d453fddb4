//! Shared test utilities and fake collaborators.

#![allow(dead_code, unused_imports)]

pub mod fake_preferences;

pub use fake_preferences::FakePreferences;

use anylocale::{Locale, LocaleStore, PersistMode, StoreOptions, Subscription};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Locales received by an observer, in delivery order.
pub type Received = Arc<Mutex<Vec<Locale>>>;

/// Subscribe an observer that records every locale it is given.
pub fn record(store: &LocaleStore) -> (Subscription, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    let subscription = store.subscribe(move |locale| sink.lock().push(locale.clone()));
    (subscription, received)
}

/// Tags of the recorded locales.
pub fn tags(received: &Received) -> Vec<String> {
    received.lock().iter().map(|l| l.to_string()).collect()
}

pub fn options(persist: PersistMode) -> StoreOptions {
    StoreOptions {
        persist,
        ..StoreOptions::default()
    }
}

/// Create a temporary preferences file path (the file itself is not created).
pub fn temp_preferences() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("preferences.toml");
    (temp_dir, path)
}
