use serde::Serialize;
use std::fmt;

/// Symbolic name of a spoken message template.
///
/// The key set is closed: every language must provide a template for every
/// variant, and `LanguageStrings::get` matches exhaustively, so a lookup can
/// never miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKey {
    WelcomeMessage,
    HelpMessage,
    GoodbyeMessage,
    ReflectorMessage,
    FallbackMessage,
    ErrorMessage,
    ConvertMessage,
}

impl MessageKey {
    /// Every key, in declaration order.
    pub const ALL: [MessageKey; 7] = [
        MessageKey::WelcomeMessage,
        MessageKey::HelpMessage,
        MessageKey::GoodbyeMessage,
        MessageKey::ReflectorMessage,
        MessageKey::FallbackMessage,
        MessageKey::ErrorMessage,
        MessageKey::ConvertMessage,
    ];

    /// The key's symbolic name (e.g. "WELCOME_MESSAGE").
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::WelcomeMessage => "WELCOME_MESSAGE",
            MessageKey::HelpMessage => "HELP_MESSAGE",
            MessageKey::GoodbyeMessage => "GOODBYE_MESSAGE",
            MessageKey::ReflectorMessage => "REFLECTOR_MESSAGE",
            MessageKey::FallbackMessage => "FALLBACK_MESSAGE",
            MessageKey::ErrorMessage => "ERROR_MESSAGE",
            MessageKey::ConvertMessage => "CONVERT_MESSAGE",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All spoken message templates for a language.
///
/// Templates may contain a single `%s` placeholder, filled in by
/// `Translator::translate_with`.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Session Messages ====================
    /// Greeting spoken on launch, also used as its reprompt
    pub welcome_message: &'static str,

    /// Usage hint spoken for the help intent
    pub help_message: &'static str,

    /// Farewell spoken on cancel/stop; the session ends afterwards
    pub goodbye_message: &'static str,

    // ==================== Diagnostic Messages ====================
    /// Echo of an intent with no dedicated handler
    /// Placeholders: %s (intent name)
    pub reflector_message: &'static str,

    /// Spoken when the platform could not map the utterance to an intent
    pub fallback_message: &'static str,

    /// Spoken by the error handler for any fault
    pub error_message: &'static str,

    // ==================== Conversion Messages ====================
    /// Conversion result; the target unit is appended after formatting
    /// Placeholders: %s (numeric result)
    pub convert_message: &'static str,
}

impl LanguageStrings {
    /// Look up the template for `key`.
    pub fn get(&self, key: MessageKey) -> &'static str {
        match key {
            MessageKey::WelcomeMessage => self.welcome_message,
            MessageKey::HelpMessage => self.help_message,
            MessageKey::GoodbyeMessage => self.goodbye_message,
            MessageKey::ReflectorMessage => self.reflector_message,
            MessageKey::FallbackMessage => self.fallback_message,
            MessageKey::ErrorMessage => self.error_message,
            MessageKey::ConvertMessage => self.convert_message,
        }
    }
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    welcome_message: "Welcome Rodrigo del noveno A, you can ask me to convert units. Which would you like to try?",
    help_message: "You can ask me to convert centimeters to meters or kilometers, and inches to yards or feet. How can I help?",
    goodbye_message: "Goodbye, Rodrigo del noveno A!",

    reflector_message: "You just triggered %s",
    fallback_message: "Sorry, I don't know about that. Please try again.",
    error_message: "Sorry, there was an error. Please try again.",

    convert_message: "The conversion result is %s.",
};

// ==================== Spanish Strings ====================

/// Spanish language strings
pub const SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    welcome_message: "Bienvenido Rodrigo del noveno A, puedes pedirme que convierta unidades. ¿Qué te gustaría intentar?",
    help_message: "Puedes pedirme que convierta centímetros a metros o kilómetros, y pulgadas a yardas o pies. ¿Cómo te puedo ayudar?",
    goodbye_message: "¡Adiós, Rodrigo del noveno A!",

    reflector_message: "Acabas de activar %s",
    fallback_message: "Lo siento, no sé sobre eso. Por favor, inténtalo de nuevo.",
    error_message: "Lo siento, hubo un error. Por favor, inténtalo de nuevo.",

    convert_message: "El resultado de la conversión es %s.",
};
