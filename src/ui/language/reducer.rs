use crate::catalog::{LocaleOption, SupportedLocales};
use crate::locale::Locale;
use crate::ui::language::intent::LanguagePickerIntent;
use crate::ui::language::state::LanguagePickerState;
use crate::ui::mvi::Reducer;

pub struct LanguagePickerReducer;

impl Reducer for LanguagePickerReducer {
    type State = LanguagePickerState;
    type Intent = LanguagePickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LanguagePickerIntent::Load { options, current } => {
                let focused = focus_for(&options, &current);
                LanguagePickerState::Visible {
                    options,
                    focused,
                    current,
                }
            }
            LanguagePickerIntent::LocaleChanged { current } => match state {
                LanguagePickerState::Visible {
                    options, focused, ..
                } => LanguagePickerState::Visible {
                    options,
                    focused,
                    current,
                },
                other => other,
            },
            LanguagePickerIntent::MoveUp => match state {
                LanguagePickerState::Visible {
                    options,
                    focused,
                    current,
                } => {
                    let new_focused = if focused == 0 {
                        options.len().saturating_sub(1)
                    } else {
                        focused - 1
                    };
                    LanguagePickerState::Visible {
                        options,
                        focused: new_focused,
                        current,
                    }
                }
                other => other,
            },
            LanguagePickerIntent::MoveDown => match state {
                LanguagePickerState::Visible {
                    options,
                    focused,
                    current,
                } => {
                    let new_focused = if focused + 1 >= options.len() {
                        0
                    } else {
                        focused + 1
                    };
                    LanguagePickerState::Visible {
                        options,
                        focused: new_focused,
                        current,
                    }
                }
                other => other,
            },
            LanguagePickerIntent::Close => LanguagePickerState::Hidden,
        }
    }
}

/// Focus the option serving `current`, or the first one.
fn focus_for(options: &[LocaleOption], current: &Locale) -> usize {
    SupportedLocales::new(options.to_vec())
        .position(current)
        .unwrap_or(0)
}
