use crate::catalog::LocaleOption;
use crate::locale::Locale;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LanguagePickerState {
    #[default]
    Hidden,
    Visible {
        options: Vec<LocaleOption>,
        focused: usize,
        /// Locale active when the picker last heard from the store.
        current: Locale,
    },
}

impl UiState for LanguagePickerState {}

impl LanguagePickerState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn focused_option(&self) -> Option<&LocaleOption> {
        match self {
            Self::Visible {
                options, focused, ..
            } => options.get(*focused),
            Self::Hidden => None,
        }
    }
}
