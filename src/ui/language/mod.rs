//! Language picker dialog.

mod intent;
mod reducer;
mod state;

pub use intent::LanguagePickerIntent;
pub use reducer::LanguagePickerReducer;
pub use state::LanguagePickerState;

use crate::locale::Locale;
use crate::store::LocaleStore;
use crate::ui::mvi::Reducer;

/// Drives a [`LanguagePickerState`] and applies the choice to a store.
#[derive(Debug, Default)]
pub struct LanguagePicker {
    state: LanguagePickerState,
}

impl LanguagePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LanguagePickerState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: LanguagePickerIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = LanguagePickerReducer::reduce(state, intent);
    }

    /// Show the supported locales, focused on the active one.
    pub fn open(&mut self, store: &LocaleStore) {
        self.dispatch(LanguagePickerIntent::Load {
            options: store.supported().options().to_vec(),
            current: store.current(),
        });
    }

    /// Apply the focused option and hide the picker.
    ///
    /// Returns the applied locale, or `None` if the picker was hidden or the
    /// store ignored the request.
    pub fn confirm(&mut self, store: &LocaleStore) -> Option<Locale> {
        let chosen = self.state.focused_option()?.tag.clone();
        self.dispatch(LanguagePickerIntent::Close);
        store.set_locale(chosen.as_str()).then_some(chosen)
    }
}
