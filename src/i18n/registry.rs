//! Supported languages and their message tables.
//!
//! The registry is built once behind a `OnceLock` and never mutated, so
//! concurrent invocations read it without locking.

use crate::i18n::strings::{LanguageStrings, ENGLISH_STRINGS, SPANISH_STRINGS};
use std::sync::OnceLock;

/// One supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 code matched against the primary subtag of a locale
    pub code: &'static str,

    /// Unrecognized locales resolve to the canonical language
    pub is_canonical: bool,

    pub enabled: bool,

    pub strings: &'static LanguageStrings,
}

pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// The process-wide registry, built on first use.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: vec![
                LanguageConfig {
                    code: "en",
                    is_canonical: true,
                    enabled: true,
                    strings: &ENGLISH_STRINGS,
                },
                LanguageConfig {
                    code: "es",
                    is_canonical: false,
                    enabled: true,
                    strings: &SPANISH_STRINGS,
                },
            ],
        })
    }

    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Languages a locale may resolve to, in registration order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// The fallback language.
    ///
    /// # Panics
    /// Panics unless exactly one registered language is canonical.
    pub fn canonical(&self) -> &LanguageConfig {
        let mut canonical = self.languages.iter().filter(|lang| lang.is_canonical);
        match (canonical.next(), canonical.next()) {
            (Some(lang), None) => lang,
            (None, _) => panic!("No canonical language found in registry"),
            (Some(_), Some(_)) => panic!("Multiple canonical languages found in registry"),
        }
    }
}
