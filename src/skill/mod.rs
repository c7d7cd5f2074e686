//! Skill pipeline: interceptors, routing and the error boundary.
//!
//! An invocation runs the request interceptors in order, dispatches to the
//! first handler whose predicate matches, then runs the response
//! interceptors. Any fault along the way is turned into a response by the
//! error handler, so `Skill::invoke` never fails.
//!
//! # Example
//!
//! ```rust,ignore
//! use unit_converter_skill::skill::converter_skill;
//!
//! let skill = converter_skill();
//! let response = skill.invoke(&envelope);
//! ```

mod handlers;
mod interceptors;
mod response;

pub use handlers::{
    default_handlers, error_handler, format_number, CANCEL_INTENT, CONVERT_INTENT,
    FALLBACK_INTENT, FROM_UNIT_SLOT, HELP_INTENT, STOP_INTENT, TO_UNIT_SLOT, VALUE_SLOT,
};
pub use interceptors::{default_request_interceptors, default_response_interceptors};
pub use response::ResponseBuilder;

use crate::envelope::{RequestEnvelope, RequestType, Response, ResponseEnvelope, RESPONSE_VERSION};
use crate::error::SkillError;
use crate::i18n::Translator;
use crate::metrics::SkillMetrics;
use std::sync::Arc;
use tracing::debug;

/// Custom user agent fragment reported in every response.
pub const CUSTOM_USER_AGENT: &str = "sample/converter/v1.0";

/// Per-invocation attributes, discarded when the invocation ends.
#[derive(Debug, Default)]
pub struct RequestAttributes {
    translator: Option<Translator>,
}

impl RequestAttributes {
    pub fn set_translator(&mut self, translator: Translator) {
        self.translator = Some(translator);
    }

    pub fn translator(&self) -> Option<Translator> {
        self.translator
    }
}

/// Everything a handler can see about the current invocation.
#[derive(Debug)]
pub struct HandlerInput<'a> {
    pub envelope: &'a RequestEnvelope,
    pub attributes: RequestAttributes,
}

impl<'a> HandlerInput<'a> {
    pub fn new(envelope: &'a RequestEnvelope) -> Self {
        Self {
            envelope,
            attributes: RequestAttributes::default(),
        }
    }

    /// The translator attached by the localization interceptor.
    pub fn translator(&self) -> Result<Translator, SkillError> {
        self.attributes
            .translator()
            .ok_or(SkillError::MissingTranslator)
    }
}

pub type CanHandleFn = fn(&HandlerInput<'_>) -> bool;
pub type HandleFn = fn(&HandlerInput<'_>) -> Result<Response, SkillError>;
pub type ErrorHandlerFn = fn(&HandlerInput<'_>, &SkillError) -> Response;

/// A routing entry: the first entry whose predicate matches handles the request.
#[derive(Clone, Copy)]
pub struct RequestHandler {
    pub name: &'static str,
    pub can_handle: CanHandleFn,
    pub handle: HandleFn,
}

impl RequestHandler {
    pub fn new(name: &'static str, can_handle: CanHandleFn, handle: HandleFn) -> Self {
        Self {
            name,
            can_handle,
            handle,
        }
    }
}

/// Hook run before routing. May write request attributes.
#[derive(Clone, Copy)]
pub struct RequestInterceptor {
    pub name: &'static str,
    pub process: fn(&mut HandlerInput<'_>) -> Result<(), SkillError>,
}

impl RequestInterceptor {
    pub fn new(
        name: &'static str,
        process: fn(&mut HandlerInput<'_>) -> Result<(), SkillError>,
    ) -> Self {
        Self { name, process }
    }
}

/// Hook run after a handler produced a response.
#[derive(Clone, Copy)]
pub struct ResponseInterceptor {
    pub name: &'static str,
    pub process: fn(&HandlerInput<'_>, &Response) -> Result<(), SkillError>,
}

impl ResponseInterceptor {
    pub fn new(
        name: &'static str,
        process: fn(&HandlerInput<'_>, &Response) -> Result<(), SkillError>,
    ) -> Self {
        Self { name, process }
    }
}

/// An assembled, immutable skill.
pub struct Skill {
    handlers: Vec<RequestHandler>,
    request_interceptors: Vec<RequestInterceptor>,
    response_interceptors: Vec<ResponseInterceptor>,
    error_handler: ErrorHandlerFn,
    user_agent: String,
    metrics: Arc<SkillMetrics>,
}

impl Skill {
    /// Produce the response for one request envelope.
    pub fn invoke(&self, envelope: &RequestEnvelope) -> ResponseEnvelope {
        self.metrics.record_request();
        if envelope.request_type() == &RequestType::SessionEndedRequest {
            self.metrics.record_session_ended();
        }

        let mut input = HandlerInput::new(envelope);
        let response = match self.dispatch(&mut input) {
            Ok(response) => {
                self.metrics.record_handled();
                response
            }
            Err(err) => {
                debug!(
                    request_id = %envelope.request.request_id,
                    kind = err.kind(),
                    "Routing to error handler"
                );
                self.metrics.record_error();
                (self.error_handler)(&input, &err)
            }
        };

        ResponseEnvelope {
            version: RESPONSE_VERSION.to_string(),
            user_agent: Some(self.user_agent.clone()),
            response,
        }
    }

    fn dispatch(&self, input: &mut HandlerInput<'_>) -> Result<Response, SkillError> {
        for interceptor in &self.request_interceptors {
            debug!("Running request interceptor {}", interceptor.name);
            (interceptor.process)(input)?;
        }

        let handler = self
            .handlers
            .iter()
            .find(|handler| (handler.can_handle)(&*input))
            .ok_or_else(|| SkillError::NoHandler {
                request_type: format!("{:?}", input.envelope.request_type()),
            })?;

        debug!("Dispatching to {}", handler.name);
        let response = (handler.handle)(input)?;

        for interceptor in &self.response_interceptors {
            debug!("Running response interceptor {}", interceptor.name);
            (interceptor.process)(input, &response)?;
        }

        Ok(response)
    }

    /// Counters for this skill instance.
    pub fn metrics(&self) -> &SkillMetrics {
        &self.metrics
    }

    /// Names of the registered handlers, in routing order.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|handler| handler.name).collect()
    }
}

/// Builder mirroring the order in which a skill is wired up.
pub struct SkillBuilder {
    handlers: Vec<RequestHandler>,
    request_interceptors: Vec<RequestInterceptor>,
    response_interceptors: Vec<ResponseInterceptor>,
    error_handler: ErrorHandlerFn,
    custom_user_agent: Option<String>,
    metrics: Option<Arc<SkillMetrics>>,
}

impl SkillBuilder {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
            error_handler,
            custom_user_agent: None,
            metrics: None,
        }
    }

    pub fn add_request_handlers(
        mut self,
        handlers: impl IntoIterator<Item = RequestHandler>,
    ) -> Self {
        self.handlers.extend(handlers);
        self
    }

    pub fn add_request_interceptors(
        mut self,
        interceptors: impl IntoIterator<Item = RequestInterceptor>,
    ) -> Self {
        self.request_interceptors.extend(interceptors);
        self
    }

    pub fn add_response_interceptors(
        mut self,
        interceptors: impl IntoIterator<Item = ResponseInterceptor>,
    ) -> Self {
        self.response_interceptors.extend(interceptors);
        self
    }

    /// Replace the default localized error handler.
    pub fn with_error_handler(mut self, error_handler: ErrorHandlerFn) -> Self {
        self.error_handler = error_handler;
        self
    }

    pub fn with_custom_user_agent(mut self, user_agent: &str) -> Self {
        self.custom_user_agent = Some(user_agent.to_string());
        self
    }

    /// Share counters with the caller (e.g. the HTTP metrics endpoint).
    pub fn with_metrics(mut self, metrics: Arc<SkillMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn build(self) -> Skill {
        let base = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
        let user_agent = match self.custom_user_agent {
            Some(custom) => format!("{} {}", base, custom),
            None => base.to_string(),
        };

        Skill {
            handlers: self.handlers,
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
            error_handler: self.error_handler,
            user_agent,
            metrics: self.metrics.unwrap_or_default(),
        }
    }
}

impl Default for SkillBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The unit converter skill with its handlers and interceptors wired up.
pub fn converter_skill() -> Skill {
    SkillBuilder::new()
        .add_request_handlers(default_handlers())
        .add_request_interceptors(default_request_interceptors())
        .add_response_interceptors(default_response_interceptors())
        .with_error_handler(error_handler)
        .with_custom_user_agent(CUSTOM_USER_AGENT)
        .build()
}
