//! Hooks that run around every handler dispatch.

use crate::envelope::Response;
use crate::error::SkillError;
use crate::i18n::resolve;
use crate::skill::{HandlerInput, RequestInterceptor, ResponseInterceptor};
use tracing::info;

/// Request interceptors, in execution order.
pub fn default_request_interceptors() -> Vec<RequestInterceptor> {
    vec![
        RequestInterceptor::new("LocalizationInterceptor", localization),
        RequestInterceptor::new("LoggingRequestInterceptor", log_request),
    ]
}

/// Response interceptors, in execution order.
pub fn default_response_interceptors() -> Vec<ResponseInterceptor> {
    vec![ResponseInterceptor::new(
        "LoggingResponseInterceptor",
        log_response,
    )]
}

/// Attach a translator for the request's locale to the request attributes.
fn localization(input: &mut HandlerInput<'_>) -> Result<(), SkillError> {
    let translator = resolve(input.envelope.locale());
    input.attributes.set_translator(translator);
    Ok(())
}

fn log_request(input: &mut HandlerInput<'_>) -> Result<(), SkillError> {
    let request = serde_json::to_string(&input.envelope.request).map_err(|e| {
        SkillError::Interceptor {
            name: "LoggingRequestInterceptor",
            message: e.to_string(),
        }
    })?;
    info!("Incoming request: {}", request);
    Ok(())
}

fn log_response(_input: &HandlerInput<'_>, response: &Response) -> Result<(), SkillError> {
    let response = serde_json::to_string(response).map_err(|e| SkillError::Interceptor {
        name: "LoggingResponseInterceptor",
        message: e.to_string(),
    })?;
    info!("Outgoing response: {}", response);
    Ok(())
}
