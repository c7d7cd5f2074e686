use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Request verification
    /// Expected application id; requests for other skills are rejected
    pub skill_id: Option<String>,
    /// Maximum request age in seconds; 0 disables the check
    pub timestamp_tolerance_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            port: match std::env::var("PORT") {
                Ok(port) => port
                    .parse()
                    .with_context(|| format!("PORT is not a valid port: {}", port))?,
                Err(_) => 8080,
            },

            // Request verification
            skill_id: std::env::var("SKILL_ID")
                .ok()
                .filter(|id| !id.trim().is_empty()),
            timestamp_tolerance_secs: std::env::var("TIMESTAMP_TOLERANCE_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(150),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            skill_id: None,
            timestamp_tolerance_secs: 150,
        }
    }
}
