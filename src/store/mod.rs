//! Session-wide locale state.
//!
//! [`LocaleStore`] is the single source of truth for the active display
//! locale. Construct one at the composition root and hand clones of the
//! handle to whatever needs to read, change or observe the locale.

mod observers;
mod writer;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{ReentrantMutex, RwLock};

use crate::catalog::{SupportedLocales, UnknownLocalePolicy};
use crate::locale::Locale;
use crate::preferences::{PreferenceStore, LOCALE_KEY};

use observers::ObserverRegistry;
use writer::PreferenceWriter;

pub use observers::Subscription;
pub use writer::PersistMode;

/// Behavior knobs for a [`LocaleStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Locale used when no usable preference is stored.
    pub fallback: Locale,
    pub supported: SupportedLocales,
    /// How to treat tags that no supported locale serves.
    pub unknown: UnknownLocalePolicy,
    pub persist: PersistMode,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            fallback: Locale::fallback(),
            supported: SupportedLocales::default(),
            unknown: UnknownLocalePolicy::default(),
            persist: PersistMode::default(),
        }
    }
}

/// Thread-safe holder of the active locale.
///
/// Cloning is cheap and yields another handle to the same state.
///
/// Changes go through [`LocaleStore::set_locale`], which updates the value,
/// notifies observers synchronously in registration order and then
/// persists the tag. Persistence is best effort: failures are logged and
/// counted but never undo the in-memory change.
#[derive(Clone)]
pub struct LocaleStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    current: RwLock<Locale>,
    initialized: AtomicBool,
    /// Serializes update/notify/persist sequences. Re-entrant so an
    /// observer may itself call `set_locale`.
    update_gate: ReentrantMutex<()>,
    /// Bumped by every accepted update, under the gate.
    generation: AtomicU64,
    observers: Arc<ObserverRegistry>,
    preferences: Arc<dyn PreferenceStore>,
    writer: PreferenceWriter,
    options: StoreOptions,
}

impl LocaleStore {
    /// Create an uninitialized store. Until [`initialize`](Self::initialize)
    /// runs, [`current`](Self::current) reports the fallback locale.
    pub fn new(preferences: Arc<dyn PreferenceStore>, options: StoreOptions) -> Self {
        let writer = PreferenceWriter::new(Arc::clone(&preferences), options.persist);
        let inner = StoreInner {
            current: RwLock::new(options.fallback.clone()),
            initialized: AtomicBool::new(false),
            update_gate: ReentrantMutex::new(()),
            generation: AtomicU64::new(0),
            observers: Arc::new(ObserverRegistry::default()),
            preferences,
            writer,
            options,
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    /// Create and initialize in one step.
    pub fn open(preferences: Arc<dyn PreferenceStore>, options: StoreOptions) -> Self {
        let store = Self::new(preferences, options);
        store.initialize();
        store
    }

    /// The active locale. Never blocks on persistence.
    pub fn current(&self) -> Locale {
        self.inner.current.read().clone()
    }

    /// Resolve the active locale from the preference store.
    ///
    /// Performs exactly one read. An absent, empty or unreadable value (or,
    /// under [`UnknownLocalePolicy::Reject`], an unsupported one) resolves to
    /// the fallback locale. Calling this again re-reads and re-resolves.
    /// Observers are not notified.
    pub fn initialize(&self) -> Locale {
        let _gate = self.inner.update_gate.lock();

        // Re-initializing must observe writes that are still queued.
        self.inner.writer.flush();

        let resolved = self.resolve_stored();
        *self.inner.current.write() = resolved.clone();
        self.inner.initialized.store(true, Ordering::SeqCst);

        tracing::info!(locale = %resolved, "Locale initialized");
        resolved
    }

    fn resolve_stored(&self) -> Locale {
        let fallback = &self.inner.options.fallback;
        let stored = match self.inner.preferences.get(LOCALE_KEY) {
            Ok(Some(tag)) => tag,
            Ok(None) => return fallback.clone(),
            Err(error) => {
                tracing::warn!(%error, "Failed to read locale preference, using fallback");
                return fallback.clone();
            }
        };

        let Ok(locale) = Locale::new(stored) else {
            tracing::debug!("Stored locale preference is empty, using fallback");
            return fallback.clone();
        };

        if self.inner.options.unknown == UnknownLocalePolicy::Reject
            && !self.inner.options.supported.contains(&locale)
        {
            tracing::warn!(locale = %locale, "Stored locale is not supported, using fallback");
            return fallback.clone();
        }

        locale
    }

    /// Switch the active locale to `tag`.
    ///
    /// An empty tag is ignored: nothing changes, nobody is notified and
    /// `false` is returned. Otherwise the new locale becomes current, every
    /// observer is called with it, and one persistence write follows.
    /// Persistence failures never reach the caller.
    pub fn set_locale(&self, tag: &str) -> bool {
        let Ok(locale) = Locale::new(tag) else {
            tracing::debug!("Ignoring empty locale tag");
            return false;
        };

        if !self.inner.options.supported.contains(&locale) {
            match self.inner.options.unknown {
                UnknownLocalePolicy::Accept => {}
                UnknownLocalePolicy::Warn => {
                    tracing::warn!(locale = %locale, "Switching to a locale with no translations");
                }
                UnknownLocalePolicy::Reject => {
                    tracing::debug!(locale = %locale, "Ignoring unsupported locale");
                    return false;
                }
            }
        }

        let _gate = self.inner.update_gate.lock();
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let previous = std::mem::replace(&mut *self.inner.current.write(), locale.clone());
        tracing::info!(
            old_locale = %previous,
            new_locale = %locale,
            "Locale switched"
        );

        // A nested set_locale from an observer supersedes this pass; the
        // remaining observers only hear about the newer locale.
        self.inner.observers.notify(&locale, || {
            self.inner.generation.load(Ordering::SeqCst) == generation
        });

        // An observer may have switched again; persist what is current now.
        let settled = self.current();
        self.inner.writer.write(settled.as_str());
        true
    }

    /// Register `observer` to be called with the new locale on every
    /// accepted [`set_locale`](Self::set_locale).
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&Locale) + Send + Sync + 'static,
    {
        let subscription = self.inner.observers.register(Arc::new(observer));
        tracing::trace!(subscription = subscription.id(), "Observer subscribed");
        subscription
    }

    /// Block until all accepted changes have been written to the
    /// preference store.
    pub fn flush(&self) {
        self.inner.writer.flush();
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.initialized.load(Ordering::SeqCst)
    }

    /// Number of persistence writes that failed since creation.
    pub fn persist_failures(&self) -> u64 {
        self.inner.writer.failures()
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.len()
    }

    pub fn fallback(&self) -> &Locale {
        &self.inner.options.fallback
    }

    pub fn supported(&self) -> &SupportedLocales {
        &self.inner.options.supported
    }
}
