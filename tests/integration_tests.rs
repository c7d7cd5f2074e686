//! Integration tests for the unit converter skill
//!
//! These tests drive complete request envelopes through the skill pipeline
//! and through the HTTP router, the way the voice platform would.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use unit_converter_skill::config::Config;
use unit_converter_skill::envelope::{RequestEnvelope, ResponseEnvelope};
use unit_converter_skill::server::{router, AppState};
use unit_converter_skill::skill::converter_skill;

// ==================== Test Helpers ====================

const SKILL_ID: &str = "amzn1.ask.skill.test";

fn launch_event(locale: &str) -> Value {
    json!({
        "version": "1.0",
        "session": {
            "new": true,
            "sessionId": "amzn1.echo-api.session.1",
            "application": { "applicationId": SKILL_ID }
        },
        "request": {
            "type": "LaunchRequest",
            "requestId": "amzn1.echo-api.request.1",
            "timestamp": Utc::now().to_rfc3339(),
            "locale": locale
        }
    })
}

fn intent_event(name: &str, locale: &str, slots: Value) -> Value {
    json!({
        "version": "1.0",
        "session": {
            "new": false,
            "sessionId": "amzn1.echo-api.session.1",
            "application": { "applicationId": SKILL_ID }
        },
        "request": {
            "type": "IntentRequest",
            "requestId": "amzn1.echo-api.request.2",
            "timestamp": Utc::now().to_rfc3339(),
            "locale": locale,
            "intent": { "name": name, "slots": slots }
        }
    })
}

fn convert_event(from: &str, to: &str, value: &str, locale: &str) -> Value {
    intent_event(
        "ConvertIntent",
        locale,
        json!({
            "fromUnit": { "name": "fromUnit", "value": from },
            "toUnit": { "name": "toUnit", "value": to },
            "value": { "name": "value", "value": value }
        }),
    )
}

fn invoke(event: Value) -> ResponseEnvelope {
    let envelope: RequestEnvelope = serde_json::from_value(event).expect("valid envelope");
    converter_skill().invoke(&envelope)
}

fn test_config() -> Config {
    Config {
        port: 8080,
        skill_id: Some(SKILL_ID.to_string()),
        timestamp_tolerance_secs: 150,
    }
}

fn app() -> axum::Router {
    router(Arc::new(AppState {
        config: test_config(),
        skill: converter_skill(),
    }))
}

async fn post_event(app: axum::Router, event: &Value) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(event.to_string()))
        .expect("valid request");

    let response = app.oneshot(request).await.expect("router responds");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    (status, body.to_vec())
}

// ==================== Pipeline Scenarios ====================

#[test]
fn test_launch_speaks_welcome_and_keeps_session_open() {
    let response = invoke(launch_event("en-US")).response;

    let speech = response.speech_text().expect("speech");
    assert!(speech.starts_with("Welcome Rodrigo del noveno A"));
    assert_eq!(response.reprompt_text(), Some(speech));
    assert_eq!(response.should_end_session, Some(false));
}

#[test]
fn test_launch_in_spanish() {
    let response = invoke(launch_event("es-MX")).response;
    assert!(response
        .speech_text()
        .expect("speech")
        .starts_with("Bienvenido"));
}

#[test]
fn test_convert_inches_to_feet() {
    let response = invoke(convert_event("inches", "feet", "24", "en-US")).response;

    assert_eq!(
        response.speech_text().as_deref(),
        Some("The conversion result is 2. feet")
    );
    assert_eq!(response.should_end_session, Some(false));
}

#[test]
fn test_convert_kilometers_to_centimeters() {
    let response = invoke(convert_event("kilómetros", "centímetros", "1", "es-ES")).response;

    assert_eq!(
        response.speech_text().as_deref(),
        Some("El resultado de la conversión es 100000. centímetros")
    );
}

#[test]
fn test_malformed_value_speaks_error() {
    let response = invoke(convert_event("inches", "feet", "abc", "en-US")).response;

    assert_eq!(
        response.speech_text().as_deref(),
        Some("Sorry, there was an error. Please try again.")
    );
    assert_eq!(response.speech_text(), response.reprompt_text());
}

#[test]
fn test_unsupported_pair_speaks_localized_error() {
    let response = invoke(convert_event("metros", "pies", "3", "es-ES")).response;

    assert_eq!(
        response.speech_text().as_deref(),
        Some("Lo siento, hubo un error. Por favor, inténtalo de nuevo.")
    );
}

#[test]
fn test_overflowing_conversion_speaks_error() {
    let spanish = invoke(convert_event("kilómetros", "centímetros", "1e308", "es-ES")).response;
    assert_eq!(
        spanish.speech_text().as_deref(),
        Some("Lo siento, hubo un error. Por favor, inténtalo de nuevo.")
    );

    let english = invoke(convert_event("yards", "inches", "1e307", "en-US")).response;
    assert_eq!(
        english.speech_text().as_deref(),
        Some("Sorry, there was an error. Please try again.")
    );
    assert!(!english.speech_text().unwrap_or_default().contains("inf"));
}

#[test]
fn test_unknown_locale_uses_english_units_and_messages() {
    let response = invoke(convert_event("yards", "feet", "1", "fr-FR")).response;

    assert_eq!(
        response.speech_text().as_deref(),
        Some("The conversion result is 3. feet")
    );
}

#[test]
fn test_help_fallback_and_cancel() {
    let help = invoke(intent_event("AMAZON.HelpIntent", "en-US", json!({}))).response;
    assert!(help.speech_text().expect("speech").contains("How can I help?"));
    assert_eq!(help.should_end_session, Some(false));

    let fallback = invoke(intent_event("AMAZON.FallbackIntent", "es-ES", json!({}))).response;
    assert_eq!(
        fallback.speech_text().as_deref(),
        Some("Lo siento, no sé sobre eso. Por favor, inténtalo de nuevo.")
    );

    let cancel = invoke(intent_event("AMAZON.CancelIntent", "en-US", json!({}))).response;
    assert_eq!(
        cancel.speech_text().as_deref(),
        Some("Goodbye, Rodrigo del noveno A!")
    );
    assert!(cancel.reprompt.is_none());
    assert_eq!(cancel.should_end_session, Some(true));
}

#[test]
fn test_unhandled_intent_is_reflected() {
    let response = invoke(intent_event("AMAZON.NavigateHomeIntent", "en-US", json!({}))).response;

    assert_eq!(
        response.speech_text().as_deref(),
        Some("You just triggered AMAZON.NavigateHomeIntent")
    );
    assert!(response.reprompt.is_none());
}

#[test]
fn test_session_ended_returns_empty_response() {
    let event = json!({
        "request": {
            "type": "SessionEndedRequest",
            "requestId": "amzn1.echo-api.request.3",
            "locale": "en-US",
            "reason": "USER_INITIATED"
        }
    });

    let envelope = invoke(event);
    assert!(envelope.response.output_speech.is_none());
    assert!(envelope.response.reprompt.is_none());
    assert!(envelope.response.should_end_session.is_none());
}

#[test]
fn test_same_event_twice_gives_identical_responses() {
    let skill = converter_skill();
    let envelope: RequestEnvelope =
        serde_json::from_value(convert_event("feet", "inches", "2", "en-US")).expect("valid");

    let first = skill.invoke(&envelope);
    let second = skill.invoke(&envelope);
    assert_eq!(first, second);
    assert_eq!(
        first.response.speech_text().as_deref(),
        Some("The conversion result is 24. inches")
    );
}

// ==================== HTTP Tests ====================

#[tokio::test]
async fn test_http_convert() {
    let (status, body) = post_event(app(), &convert_event("inches", "feet", "24", "en-US")).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(json["version"], "1.0");
    assert_eq!(
        json["response"]["outputSpeech"]["ssml"],
        "<speak>The conversion result is 2. feet</speak>"
    );
    assert_eq!(json["response"]["shouldEndSession"], false);
}

#[tokio::test]
async fn test_http_rejects_other_application() {
    let mut event = launch_event("en-US");
    event["session"]["application"]["applicationId"] = json!("amzn1.ask.skill.other");

    let (status, _) = post_event(app(), &event).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_http_rejects_stale_timestamp() {
    let mut event = launch_event("en-US");
    event["request"]["timestamp"] = json!("2020-01-01T00:00:00Z");

    let (status, body) = post_event(app(), &event).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(String::from_utf8_lossy(&body).contains("tolerance"));
}

#[tokio::test]
async fn test_http_rejects_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .expect("valid request");

    let response = app().oneshot(request).await.expect("router responds");
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_http_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("valid request");

    let response = app().oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_http_metrics_count_requests() {
    let state = Arc::new(AppState {
        config: test_config(),
        skill: converter_skill(),
    });

    post_event(router(Arc::clone(&state)), &launch_event("en-US")).await;
    post_event(
        router(Arc::clone(&state)),
        &convert_event("inches", "feet", "abc", "en-US"),
    )
    .await;

    let request = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .expect("valid request");
    let response = router(state).oneshot(request).await.expect("router responds");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");

    let report: Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(report["requests"], 2);
    assert_eq!(report["rejected"], 0);
    assert_eq!(report["handled"], 1);
    assert_eq!(report["errors"], 1);
    assert_eq!(report["error_rate"], 50.0);
}

#[tokio::test]
async fn test_http_metrics_count_rejections() {
    let state = Arc::new(AppState {
        config: test_config(),
        skill: converter_skill(),
    });

    let mut foreign = launch_event("en-US");
    foreign["session"]["application"]["applicationId"] = json!("amzn1.ask.skill.other");
    let mut stale = launch_event("en-US");
    stale["request"]["timestamp"] = json!("2020-01-01T00:00:00Z");

    let (status, _) = post_event(router(Arc::clone(&state)), &foreign).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = post_event(router(Arc::clone(&state)), &stale).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    post_event(router(Arc::clone(&state)), &launch_event("en-US")).await;

    let report = state.skill.metrics().report();
    assert_eq!(report.rejected, 2);
    assert_eq!(report.requests, 1);
    assert_eq!(report.handled, 1);
}
