use crate::envelope::{OutputSpeech, Reprompt, Response};

/// Accumulates the parts of a response before it is emitted.
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spoken output.
    pub fn speak(mut self, text: &str) -> Self {
        self.response.output_speech = Some(OutputSpeech::ssml(text));
        self
    }

    /// Set the reprompt. A reprompt keeps the session open.
    pub fn reprompt(mut self, text: &str) -> Self {
        self.response.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::ssml(text),
        });
        self.response.should_end_session = Some(false);
        self
    }

    /// Explicitly end or keep open the session.
    pub fn with_should_end_session(mut self, should_end: bool) -> Self {
        self.response.should_end_session = Some(should_end);
        self
    }

    pub fn get_response(self) -> Response {
        self.response
    }
}
