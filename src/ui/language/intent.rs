use crate::catalog::LocaleOption;
use crate::locale::Locale;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LanguagePickerIntent {
    Load {
        options: Vec<LocaleOption>,
        current: Locale,
    },
    /// The active locale changed elsewhere while the picker is open.
    LocaleChanged { current: Locale },
    MoveUp,
    MoveDown,
    Close,
}

impl Intent for LanguagePickerIntent {}
