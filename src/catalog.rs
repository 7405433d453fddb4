//! Supported locales and the policy for tags outside that list.

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::locale::Locale;

/// What to do when a requested locale is not in [`SupportedLocales`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownLocalePolicy {
    /// Apply the tag verbatim.
    Accept,
    /// Apply the tag verbatim and log a warning.
    #[default]
    Warn,
    /// Ignore the request, as for an empty tag.
    Reject,
}

/// A selectable locale with its name in its own language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleOption {
    pub tag: Locale,
    pub native_name: String,
}

impl LocaleOption {
    fn builtin(tag: &str, native_name: &str) -> Self {
        Self {
            tag: Locale::new(tag).unwrap_or_else(|_| Locale::fallback()),
            native_name: native_name.to_string(),
        }
    }
}

/// Ordered list of locales the application ships translations for.
///
/// Order is significant: it is the order the language picker lists them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportedLocales {
    options: Vec<LocaleOption>,
}

impl SupportedLocales {
    pub fn new(options: Vec<LocaleOption>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &[LocaleOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Whether `locale` is served by one of the options.
    ///
    /// A tag matches its exact option, or any option sharing its primary
    /// language (`es-MX` is served by `es`). Language matching only applies
    /// when both tags are well-formed BCP 47 identifiers.
    pub fn contains(&self, locale: &Locale) -> bool {
        self.find(locale).is_some()
    }

    /// Best option for `locale`: exact tag first, then same language.
    pub fn find(&self, locale: &Locale) -> Option<&LocaleOption> {
        if let Some(exact) = self.options.iter().find(|o| &o.tag == locale) {
            return Some(exact);
        }

        let wanted: LanguageIdentifier = locale.as_str().parse().ok()?;
        self.options.iter().find(|option| {
            option
                .tag
                .as_str()
                .parse::<LanguageIdentifier>()
                .is_ok_and(|candidate| candidate.language == wanted.language)
        })
    }

    /// Index of the option serving `locale`, if any.
    pub fn position(&self, locale: &Locale) -> Option<usize> {
        let found = self.find(locale)?;
        self.options.iter().position(|o| o.tag == found.tag)
    }
}

impl Default for SupportedLocales {
    fn default() -> Self {
        Self::new(vec![
            LocaleOption::builtin("en", "English"),
            LocaleOption::builtin("es", "Español"),
            LocaleOption::builtin("fr", "Français"),
            LocaleOption::builtin("de", "Deutsch"),
            LocaleOption::builtin("it", "Italiano"),
            LocaleOption::builtin("pt-BR", "Português (Brasil)"),
            LocaleOption::builtin("ja", "日本語"),
            LocaleOption::builtin("zh-CN", "简体中文"),
        ])
    }
}
