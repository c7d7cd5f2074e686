//! Template consistency validation.
//!
//! Every enabled language must provide a usable template for every message
//! key, with the same number of `%s` placeholders as the canonical language.
//! The key set itself is enforced by the type system; this module checks the
//! template text.

use crate::i18n::translator::PLACEHOLDER;
use crate::i18n::{Language, LanguageRegistry, MessageKey};

/// Validation report containing errors and warnings about the templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Template problems that would produce broken speech
    pub errors: Vec<String>,

    /// Non-critical warnings (e.g. an untranslated template)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for message templates.
pub struct TemplateValidator;

impl TemplateValidator {
    /// Validate the templates of every enabled language against the
    /// canonical language.
    pub fn validate_all() -> ValidationReport {
        let canonical = Language::canonical();
        let mut report = ValidationReport::new();

        for config in LanguageRegistry::get().list_enabled() {
            for key in MessageKey::ALL {
                Self::check_template(
                    &mut report,
                    config.code,
                    key,
                    config.strings.get(key),
                    canonical.strings().get(key),
                    config.is_canonical,
                );
            }
        }

        report
    }

    /// Check one template against its canonical counterpart.
    fn check_template(
        report: &mut ValidationReport,
        code: &str,
        key: MessageKey,
        template: &str,
        canonical_template: &str,
        is_canonical: bool,
    ) {
        if template.trim().is_empty() {
            report
                .errors
                .push(format!("{}: template for {} is empty", code, key));
            return;
        }

        let placeholders = Self::count_placeholders(template);
        if placeholders > 1 {
            report.errors.push(format!(
                "{}: template for {} has {} placeholders, at most 1 is supported",
                code, key, placeholders
            ));
        }

        if is_canonical {
            return;
        }

        let expected = Self::count_placeholders(canonical_template);
        if placeholders != expected {
            report.errors.push(format!(
                "{}: placeholder mismatch for {}: canonical has {}, translation has {}",
                code, key, expected, placeholders
            ));
        }

        if template == canonical_template {
            report.warnings.push(format!(
                "{}: template for {} is identical to the canonical text",
                code, key
            ));
        }
    }

    fn count_placeholders(template: &str) -> usize {
        template.matches(PLACEHOLDER).count()
    }
}
