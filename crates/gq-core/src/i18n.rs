//! Supported UI languages and fixed-variant localized values.
//!
//! Every user-facing string in guide and quest data exists in each supported
//! language.  `Localized<T>` has one field per [`Language`] variant so a
//! missing translation is a compile error at the construction site rather
//! than a lookup miss at runtime.

use std::str::FromStr;

use crate::CoreError;

/// A language the product ships translations for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Russian.
    Ru,
    /// Georgian.
    Ge,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Ru, Language::Ge];

    /// Short language code as used in data exports and URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Ge => "ge",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            "ge" | "ka" => Ok(Language::Ge),
            other => Err(CoreError::UnknownLanguage(other.to_owned())),
        }
    }
}

// ── Localized ─────────────────────────────────────────────────────────────────

/// One value per supported language.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Localized<T = String> {
    pub en: T,
    pub ru: T,
    pub ge: T,
}

impl<T> Localized<T> {
    pub fn new(en: T, ru: T, ge: T) -> Self {
        Self { en, ru, ge }
    }

    #[inline]
    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::En => &self.en,
            Language::Ru => &self.ru,
            Language::Ge => &self.ge,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, lang: Language) -> &mut T {
        match lang {
            Language::En => &mut self.en,
            Language::Ru => &mut self.ru,
            Language::Ge => &mut self.ge,
        }
    }

    /// Apply `f` to every translation.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Localized<U> {
        Localized {
            en: f(self.en),
            ru: f(self.ru),
            ge: f(self.ge),
        }
    }
}

impl<T: Clone> Localized<T> {
    /// The same value for every language (untranslated content, numbers).
    pub fn uniform(value: T) -> Self {
        Self {
            en: value.clone(),
            ru: value.clone(),
            ge: value,
        }
    }
}

impl Localized<String> {
    /// Build from string slices in `en, ru, ge` order.
    pub fn text(en: &str, ru: &str, ge: &str) -> Self {
        Self::new(en.to_owned(), ru.to_owned(), ge.to_owned())
    }
}
