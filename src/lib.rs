//! Session-wide display locale with durable preference storage.
//!
//! A [`LocaleStore`] holds the active [`Locale`], restores the persisted
//! choice from a [`PreferenceStore`] at startup and propagates changes to
//! subscribed observers before persisting them.

pub mod catalog;
pub mod config;
pub mod locale;
pub mod logging;
pub mod preferences;
pub mod store;
pub mod ui;

pub use catalog::{LocaleOption, SupportedLocales, UnknownLocalePolicy};
pub use locale::{Locale, LocaleError, FALLBACK_TAG};
pub use preferences::{
    MemoryPreferences, PreferenceError, PreferenceStore, TomlPreferences, LOCALE_KEY,
};
pub use store::{LocaleStore, PersistMode, StoreOptions, Subscription};
