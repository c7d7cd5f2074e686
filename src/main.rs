use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};
use unit_converter_skill::config::Config;
use unit_converter_skill::i18n::{LanguageRegistry, TemplateValidator};
use unit_converter_skill::server::{self, AppState};
use unit_converter_skill::skill::converter_skill;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when not present)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("unit_converter_skill=info".parse()?),
        )
        .init();

    info!("Starting unit converter skill");

    // Load configuration from environment
    let config = Config::from_env()?;
    if config.skill_id.is_none() {
        warn!("SKILL_ID not set, application id verification disabled");
    }
    if config.timestamp_tolerance_secs == 0 {
        warn!("TIMESTAMP_TOLERANCE_SECS is 0, timestamp verification disabled");
    }

    // Check templates before accepting traffic
    let report = TemplateValidator::validate_all();
    for error in &report.errors {
        warn!("Template error: {}", error);
    }
    for warning in &report.warnings {
        warn!("Template warning: {}", warning);
    }
    let languages: Vec<_> = LanguageRegistry::get()
        .list_enabled()
        .iter()
        .map(|lang| lang.code)
        .collect();
    info!("Enabled languages: {}", languages.join(", "));

    let skill = converter_skill();
    info!("Registered handlers: {}", skill.handler_names().join(", "));

    let state = Arc::new(AppState { config, skill });
    server::serve(state).await
}
