//! Locale value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tag used whenever no usable preference exists.
pub const FALLBACK_TAG: &str = "en";

/// Errors produced when constructing a [`Locale`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale tag must not be empty")]
    Empty,
}

/// A language/region tag such as `en`, `fr` or `pt-BR`.
///
/// Any non-empty string is accepted verbatim; no canonicalization is applied,
/// so `pt-BR` and `pt_BR` are distinct locales.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Result<Self, LocaleError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(LocaleError::Empty);
        }
        Ok(Self(tag))
    }

    /// The locale used when nothing else resolves (`en`).
    pub fn fallback() -> Self {
        Self(FALLBACK_TAG.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag: everything before the first `-` or `_`.
    pub fn language(&self) -> &str {
        self.0
            .split(['-', '_'])
            .next()
            .unwrap_or(self.0.as_str())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tag_is_rejected() {
        assert_eq!(Locale::new(""), Err(LocaleError::Empty));
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn non_empty_tags_are_kept_verbatim() {
        for tag in ["en", "pt-BR", "zz_unknown", " "] {
            assert_eq!(Locale::new(tag).unwrap().as_str(), tag);
        }
    }

    #[test]
    fn equality_is_by_tag() {
        assert_eq!(Locale::new("fr").unwrap(), "fr".parse().unwrap());
        assert_ne!(Locale::new("pt-BR").unwrap(), Locale::new("pt_BR").unwrap());
    }

    #[test]
    fn fallback_is_english() {
        assert_eq!(Locale::fallback().as_str(), FALLBACK_TAG);
        assert_eq!(FALLBACK_TAG, "en");
    }

    #[test]
    fn language_subtag() {
        assert_eq!(Locale::new("pt-BR").unwrap().language(), "pt");
        assert_eq!(Locale::new("zh_CN").unwrap().language(), "zh");
        assert_eq!(Locale::new("de").unwrap().language(), "de");
    }

    #[test]
    fn serde_rejects_empty_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            locale: Locale,
        }

        let ok: Wrapper = toml::from_str(r#"locale = "es""#).unwrap();
        assert_eq!(ok.locale.as_str(), "es");
        assert!(toml::from_str::<Wrapper>(r#"locale = """#).is_err());
    }
}
