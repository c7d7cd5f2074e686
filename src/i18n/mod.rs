//! Internationalization (i18n) module for the skill's spoken output.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their templates
//! - `language`: Type-safe Language type, including locale tag resolution
//! - `strings`: Message keys and the per-language template tables
//! - `translator`: Resolves a locale tag and formats templates
//! - `validator`: Template consistency checks across languages
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{resolve, MessageKey};
//!
//! let t = resolve("es-ES");
//! let goodbye = t.translate(MessageKey::GoodbyeMessage);
//! let echo = t.translate_with(MessageKey::ReflectorMessage, "ConvertIntent");
//! ```

mod language;
mod registry;
mod strings;
mod translator;
mod validator;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, MessageKey};
pub use translator::{resolve, Translator};
pub use validator::{TemplateValidator, ValidationReport};
