//! Observer registry for locale changes.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::locale::Locale;

type Callback = Arc<dyn Fn(&Locale) + Send + Sync>;

/// Callbacks keyed by subscription id.
///
/// Ids are handed out in increasing order, so iterating the map visits
/// observers in registration order.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    next_id: AtomicU64,
    observers: Mutex<BTreeMap<u64, Callback>>,
}

impl ObserverRegistry {
    pub(crate) fn register(self: &Arc<Self>, callback: Callback) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.observers.lock().insert(id, callback);
        Subscription {
            id,
            registry: Arc::downgrade(self),
            detached: false,
        }
    }

    fn remove(&self, id: u64) -> bool {
        self.observers.lock().remove(&id).is_some()
    }

    fn contains(&self, id: u64) -> bool {
        self.observers.lock().contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.lock().len()
    }

    /// Invoke every observer with `locale` while `still_current` holds.
    ///
    /// The lock is never held while a callback runs, so callbacks may
    /// subscribe or unsubscribe. An observer removed during this pass is
    /// skipped; one added during this pass is not invoked until the next.
    /// Once `still_current` returns false the pass stops: a newer value has
    /// already been delivered and later observers must not see this one.
    pub(crate) fn notify(&self, locale: &Locale, still_current: impl Fn() -> bool) {
        let ids: Vec<u64> = self.observers.lock().keys().copied().collect();
        for id in ids {
            if !still_current() {
                tracing::trace!(locale = %locale, "Notification superseded by a newer locale");
                return;
            }
            let callback = self.observers.lock().get(&id).cloned();
            if let Some(callback) = callback {
                callback(locale);
            }
        }
    }
}

/// Handle returned by [`LocaleStore::subscribe`](crate::LocaleStore::subscribe).
///
/// Dropping the handle unsubscribes the observer. Use [`Subscription::detach`]
/// to keep the observer registered for the lifetime of the store.
#[must_use = "dropping a Subscription unsubscribes the observer immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<ObserverRegistry>,
    detached: bool,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Stop receiving notifications. Safe to call repeatedly and from
    /// inside the observer's own callback.
    ///
    /// Notifications that start after this returns never reach the
    /// observer. A notification already in flight on another thread may
    /// still deliver one call if it fetched the callback before removal.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.remove(self.id) {
                tracing::trace!(subscription = self.id, "Observer unsubscribed");
            }
        }
    }

    /// Whether the observer is still registered.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.contains(self.id))
    }

    /// Keep the observer registered after this handle is dropped.
    pub fn detach(mut self) {
        self.detached = true;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if !self.detached {
            self.unsubscribe();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
