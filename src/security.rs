use crate::config::Config;
use crate::envelope::RequestEnvelope;
use chrono::{DateTime, Utc};
use subtle::ConstantTimeEq;
use thiserror::Error;

/// Reasons a request envelope is refused before it reaches the skill.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("request is for a different application")]
    ApplicationMismatch,

    #[error("request carries no application id")]
    MissingApplicationId,

    #[error("request carries no timestamp")]
    MissingTimestamp,

    #[error("request timestamp is {age_secs}s away from now, tolerance is {tolerance_secs}s")]
    StaleTimestamp { age_secs: i64, tolerance_secs: u64 },
}

/// Constant-time string comparison to prevent timing attacks
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Check the envelope against the configured application id and timestamp tolerance.
pub fn verify_request(
    config: &Config,
    envelope: &RequestEnvelope,
    now: DateTime<Utc>,
) -> Result<(), VerificationError> {
    if let Some(expected) = &config.skill_id {
        let actual = envelope
            .application_id()
            .ok_or(VerificationError::MissingApplicationId)?;
        if !constant_time_compare(actual, expected) {
            return Err(VerificationError::ApplicationMismatch);
        }
    }

    if config.timestamp_tolerance_secs > 0 {
        let timestamp = envelope
            .request
            .timestamp
            .ok_or(VerificationError::MissingTimestamp)?;
        let age = (now - timestamp).num_seconds().abs();
        if age > config.timestamp_tolerance_secs as i64 {
            return Err(VerificationError::StaleTimestamp {
                age_secs: age,
                tolerance_secs: config.timestamp_tolerance_secs,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn envelope(
        application_id: Option<&str>,
        timestamp: Option<DateTime<Utc>>,
    ) -> RequestEnvelope {
        let mut json = serde_json::json!({
            "request": { "type": "LaunchRequest", "locale": "en-US" }
        });
        if let Some(id) = application_id {
            json["session"] = serde_json::json!({
                "sessionId": "session-1",
                "application": { "applicationId": id }
            });
        }
        if let Some(ts) = timestamp {
            json["request"]["timestamp"] = serde_json::json!(ts.to_rfc3339());
        }
        serde_json::from_value(json).expect("Should deserialize")
    }

    fn config(skill_id: Option<&str>, tolerance: u64) -> Config {
        Config {
            port: 8080,
            skill_id: skill_id.map(str::to_string),
            timestamp_tolerance_secs: tolerance,
        }
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("secret123", "secret123"));
        assert!(!constant_time_compare("secret123", "secret124"));
        assert!(!constant_time_compare("secret123", "secret12"));
        assert!(!constant_time_compare("", "secret"));
    }

    // ==================== Application Id Tests ====================

    #[test]
    fn test_no_checks_configured() {
        let env = envelope(None, None);
        assert!(verify_request(&config(None, 0), &env, Utc::now()).is_ok());
    }

    #[test]
    fn test_matching_application_id() {
        let env = envelope(Some("amzn1.ask.skill.abc"), None);
        let result = verify_request(&config(Some("amzn1.ask.skill.abc"), 0), &env, Utc::now());
        assert!(result.is_ok());
    }

    #[test]
    fn test_mismatched_application_id() {
        let env = envelope(Some("amzn1.ask.skill.other"), None);
        let result = verify_request(&config(Some("amzn1.ask.skill.abc"), 0), &env, Utc::now());
        assert_eq!(result, Err(VerificationError::ApplicationMismatch));
    }

    #[test]
    fn test_missing_application_id() {
        let env = envelope(None, None);
        let result = verify_request(&config(Some("amzn1.ask.skill.abc"), 0), &env, Utc::now());
        assert_eq!(result, Err(VerificationError::MissingApplicationId));
    }

    // ==================== Timestamp Tests ====================

    #[test]
    fn test_fresh_timestamp() {
        let now = Utc::now();
        let env = envelope(None, Some(now - Duration::seconds(30)));
        assert!(verify_request(&config(None, 150), &env, now).is_ok());
    }

    #[test]
    fn test_stale_timestamp() {
        let now = Utc::now();
        let env = envelope(None, Some(now - Duration::seconds(300)));
        let result = verify_request(&config(None, 150), &env, now);
        assert!(matches!(
            result,
            Err(VerificationError::StaleTimestamp { tolerance_secs: 150, .. })
        ));
    }

    #[test]
    fn test_future_timestamp_outside_tolerance() {
        let now = Utc::now();
        let env = envelope(None, Some(now + Duration::seconds(300)));
        assert!(verify_request(&config(None, 150), &env, now).is_err());
    }

    #[test]
    fn test_missing_timestamp() {
        let env = envelope(None, None);
        let result = verify_request(&config(None, 150), &env, Utc::now());
        assert_eq!(result, Err(VerificationError::MissingTimestamp));
    }
}
