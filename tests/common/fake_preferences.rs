//! Recording preference store with failure injection.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anylocale::{PreferenceError, PreferenceStore};
use parking_lot::Mutex;

#[derive(Default)]
pub struct FakePreferences {
    values: Mutex<HashMap<String, String>>,
    writes: Mutex<Vec<(String, String)>>,
    reads: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FakePreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holding(key: &str, value: &str) -> Self {
        let fake = Self::default();
        fake.values
            .lock()
            .insert(key.to_string(), value.to_string());
        fake
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Value currently held under `key`, bypassing failure injection.
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    /// Every attempted write, successful or not.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().clone()
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl PreferenceStore for FakePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(PreferenceError::Unavailable {
                reason: "injected read failure".to_string(),
            });
        }
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.writes
            .lock()
            .push((key.to_string(), value.to_string()));
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PreferenceError::Unavailable {
                reason: "injected write failure".to_string(),
            });
        }
        self.values
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
