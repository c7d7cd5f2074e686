//! Request handlers of the unit converter skill.
//!
//! Each handler is a plain (predicate, handler) pair. Order matters: the
//! router picks the first handler whose predicate accepts the request, so
//! the intent reflector must stay last among the intent handlers.

use crate::convert::{convert, parse_value};
use crate::envelope::{RequestType, Response};
use crate::error::SkillError;
use crate::i18n::{resolve, MessageKey};
use crate::skill::{HandlerInput, RequestHandler, ResponseBuilder};
use tracing::{info, warn};

pub const CONVERT_INTENT: &str = "ConvertIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const FALLBACK_INTENT: &str = "AMAZON.FallbackIntent";

pub const FROM_UNIT_SLOT: &str = "fromUnit";
pub const TO_UNIT_SLOT: &str = "toUnit";
pub const VALUE_SLOT: &str = "value";

/// The skill's handlers, in routing order.
pub fn default_handlers() -> Vec<RequestHandler> {
    vec![
        RequestHandler::new("LaunchRequestHandler", is_launch, handle_launch),
        RequestHandler::new("ConvertIntentHandler", is_convert, handle_convert),
        RequestHandler::new("HelpIntentHandler", is_help, handle_help),
        RequestHandler::new(
            "CancelAndStopIntentHandler",
            is_cancel_or_stop,
            handle_cancel_and_stop,
        ),
        RequestHandler::new("FallbackIntentHandler", is_fallback, handle_fallback),
        RequestHandler::new(
            "SessionEndedRequestHandler",
            is_session_ended,
            handle_session_ended,
        ),
        RequestHandler::new(
            "IntentReflectorHandler",
            is_any_intent,
            handle_intent_reflector,
        ),
    ]
}

// ==================== Predicates ====================

fn is_launch(input: &HandlerInput<'_>) -> bool {
    input.envelope.request_type() == &RequestType::LaunchRequest
}

fn is_convert(input: &HandlerInput<'_>) -> bool {
    input.envelope.is_intent(CONVERT_INTENT)
}

fn is_help(input: &HandlerInput<'_>) -> bool {
    input.envelope.is_intent(HELP_INTENT)
}

fn is_cancel_or_stop(input: &HandlerInput<'_>) -> bool {
    input.envelope.is_intent(CANCEL_INTENT) || input.envelope.is_intent(STOP_INTENT)
}

fn is_fallback(input: &HandlerInput<'_>) -> bool {
    input.envelope.is_intent(FALLBACK_INTENT)
}

fn is_session_ended(input: &HandlerInput<'_>) -> bool {
    input.envelope.request_type() == &RequestType::SessionEndedRequest
}

fn is_any_intent(input: &HandlerInput<'_>) -> bool {
    input.envelope.request_type() == &RequestType::IntentRequest
}

// ==================== Handlers ====================

fn handle_launch(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    let speak_output = input.translator()?.translate(MessageKey::WelcomeMessage);

    Ok(ResponseBuilder::new()
        .speak(&speak_output)
        .reprompt(&speak_output)
        .get_response())
}

fn handle_convert(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    let t = input.translator()?;
    let from_unit = required_slot(input, FROM_UNIT_SLOT)?;
    let to_unit = required_slot(input, TO_UNIT_SLOT)?;
    let value = parse_value(required_slot(input, VALUE_SLOT)?)?;

    let result = convert(t.language(), from_unit, to_unit, value)?;
    info!(
        "Converted {} {} to {} {} ({})",
        value,
        from_unit,
        result,
        to_unit,
        t.language()
    );

    let speak_output = format!(
        "{} {}",
        t.translate_with(MessageKey::ConvertMessage, format_number(result)),
        to_unit
    );

    Ok(ResponseBuilder::new()
        .speak(&speak_output)
        .reprompt(&speak_output)
        .get_response())
}

fn handle_help(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    let speak_output = input.translator()?.translate(MessageKey::HelpMessage);

    Ok(ResponseBuilder::new()
        .speak(&speak_output)
        .reprompt(&speak_output)
        .get_response())
}

fn handle_cancel_and_stop(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    let speak_output = input.translator()?.translate(MessageKey::GoodbyeMessage);

    Ok(ResponseBuilder::new()
        .speak(&speak_output)
        .with_should_end_session(true)
        .get_response())
}

fn handle_fallback(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    let speak_output = input.translator()?.translate(MessageKey::FallbackMessage);

    Ok(ResponseBuilder::new()
        .speak(&speak_output)
        .reprompt(&speak_output)
        .get_response())
}

fn handle_session_ended(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    info!(
        reason = input.envelope.request.reason.as_deref().unwrap_or("unknown"),
        "Session ended: {}",
        serde_json::to_string(input.envelope).unwrap_or_default()
    );

    Ok(ResponseBuilder::new().get_response())
}

fn handle_intent_reflector(input: &HandlerInput<'_>) -> Result<Response, SkillError> {
    let intent_name = input.envelope.intent_name().ok_or(SkillError::MissingIntent)?;
    let speak_output = input
        .translator()?
        .translate_with(MessageKey::ReflectorMessage, intent_name);

    Ok(ResponseBuilder::new()
        .speak(&speak_output)
        .with_should_end_session(false)
        .get_response())
}

// ==================== Error Handler ====================

/// Catch-all error handler: speaks the localized error message.
///
/// Falls back to resolving the request's locale when the localization
/// interceptor never ran.
pub fn error_handler(input: &HandlerInput<'_>, error: &SkillError) -> Response {
    let t = input
        .translator()
        .unwrap_or_else(|_| resolve(input.envelope.locale()));
    warn!(kind = error.kind(), "Error handled: {}", error);

    let speak_output = t.translate(MessageKey::ErrorMessage);
    ResponseBuilder::new()
        .speak(&speak_output)
        .reprompt(&speak_output)
        .get_response()
}

// ==================== Helpers ====================

fn required_slot<'a>(input: &HandlerInput<'a>, slot: &'static str) -> Result<&'a str, SkillError> {
    input
        .envelope
        .slot_value(slot)
        .ok_or(SkillError::MissingSlot(slot))
}

/// Shortest decimal rendering of a conversion result ("2", "2.5", "100000").
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
