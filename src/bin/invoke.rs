//! Invoke binary - runs a single request envelope through the skill locally
//!
//! Usage:
//!   cargo run --bin invoke -- event.json     # Read the envelope from a file
//!   cat event.json | cargo run --bin invoke  # Read the envelope from stdin
//!
//! Prints the response envelope as pretty JSON. No request verification is
//! performed.

use anyhow::{Context, Result};
use std::io::Read;
use tracing::info;
use unit_converter_skill::envelope::RequestEnvelope;
use unit_converter_skill::skill::converter_skill;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("unit_converter_skill=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read request envelope from stdin")?;
            buffer
        }
    };

    let envelope: RequestEnvelope =
        serde_json::from_str(&input).context("Invalid request envelope")?;
    info!("Invoking skill with {:?}", envelope.request_type());

    let response = converter_skill().invoke(&envelope);
    if let Some(speech) = response.response.speech_text() {
        info!("Speech: {}", speech);
    }
    if let Some(reprompt) = response.response.reprompt_text() {
        info!("Reprompt: {}", reprompt);
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&response).context("Failed to serialize response")?
    );

    Ok(())
}
