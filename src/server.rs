//! HTTP endpoint hosting the skill.

use crate::config::Config;
use crate::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::metrics::MetricsReport;
use crate::security::{verify_request, VerificationError};
use crate::skill::Skill;
use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared state of the HTTP server.
pub struct AppState {
    pub config: Config,
    pub skill: Skill,
}

impl IntoResponse for VerificationError {
    fn into_response(self) -> Response {
        let status = match self {
            VerificationError::ApplicationMismatch | VerificationError::MissingApplicationId => {
                StatusCode::FORBIDDEN
            }
            VerificationError::MissingTimestamp | VerificationError::StaleTimestamp { .. } => {
                StatusCode::BAD_REQUEST
            }
        };
        (status, self.to_string()).into_response()
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(handle_skill_request))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured port and serve until the process exits.
pub async fn serve(state: Arc<AppState>) -> Result<()> {
    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("✓ Listening on {}", addr);
    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}

async fn handle_skill_request(
    State(state): State<Arc<AppState>>,
    Json(envelope): Json<RequestEnvelope>,
) -> Result<Json<ResponseEnvelope>, VerificationError> {
    if let Err(e) = verify_request(&state.config, &envelope, Utc::now()) {
        state.skill.metrics().record_rejected();
        warn!(
            request_id = %envelope.request.request_id,
            "Rejected request: {}", e
        );
        return Err(e);
    }

    Ok(Json(state.skill.invoke(&envelope)))
}

async fn health() -> &'static str {
    "OK"
}

async fn metrics(State(state): State<Arc<AppState>>) -> Json<MetricsReport> {
    Json(state.skill.metrics().report())
}
