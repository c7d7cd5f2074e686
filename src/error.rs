use crate::convert::ConversionError;
use thiserror::Error;

/// Faults raised while producing a skill response.
///
/// Every variant is caught by the skill's error handler and turned into the
/// localized error message; none of this text is ever spoken.
#[derive(Debug, Error)]
pub enum SkillError {
    /// A slot the handler needs was missing or unfilled
    #[error("missing slot value: {0}")]
    MissingSlot(&'static str),

    /// An intent handler ran on a request without an intent
    #[error("request carries no intent")]
    MissingIntent,

    /// No registered handler accepted the request
    #[error("no handler found for {request_type} request")]
    NoHandler { request_type: String },

    /// The localization interceptor did not run before a handler
    #[error("translator not attached to request attributes")]
    MissingTranslator,

    /// Conversion dispatch failed
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// A request or response interceptor failed
    #[error("interceptor {name} failed: {message}")]
    Interceptor { name: &'static str, message: String },
}

impl SkillError {
    /// Short machine-readable label, used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            SkillError::MissingSlot(_) => "missing_slot",
            SkillError::MissingIntent => "missing_intent",
            SkillError::NoHandler { .. } => "no_handler",
            SkillError::MissingTranslator => "missing_translator",
            SkillError::Conversion(ConversionError::UnsupportedPair { .. }) => "unsupported_pair",
            SkillError::Conversion(ConversionError::InvalidNumber(_)) => "invalid_number",
            SkillError::Conversion(ConversionError::OutOfRange { .. }) => "out_of_range",
            SkillError::Interceptor { .. } => "interceptor",
        }
    }
}
