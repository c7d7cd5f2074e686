//! Locale resolution and template formatting.

use crate::i18n::{Language, MessageKey};
use std::fmt::Display;

/// Placeholder substituted by `translate_with`.
pub const PLACEHOLDER: &str = "%s";

/// Translates message keys for one resolved language.
///
/// Built fresh for every invocation from the static tables; it holds no
/// mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

/// Resolve a platform locale tag (e.g. "en-US") into a translator.
///
/// Unrecognized languages fall back to English.
pub fn resolve(locale_tag: &str) -> Translator {
    Translator::new(Language::from_locale_tag(locale_tag))
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// The language this translator speaks.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The raw template for `key`.
    pub fn translate(&self, key: MessageKey) -> String {
        self.language.strings().get(key).to_string()
    }

    /// The template for `key` with its `%s` placeholder replaced by `arg`.
    ///
    /// Templates without a placeholder are returned unchanged.
    pub fn translate_with(&self, key: MessageKey, arg: impl Display) -> String {
        let template = self.language.strings().get(key);
        if template.contains(PLACEHOLDER) {
            template.replacen(PLACEHOLDER, &arg.to_string(), 1)
        } else {
            template.to_string()
        }
    }
}
