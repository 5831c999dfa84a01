use chrono::{DateTime, Duration, SecondsFormat, Utc};
use sha2::{Digest, Sha256};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::trends::value_objects::TrendThresholds;

pub mod entities;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

#[derive(Clone, Debug)]
pub struct YshyConfig {
    pub llm: LLMConfig,
    pub geo: GeoConfig,
    pub session: SessionConfig,
    pub trend: TrendThresholds,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct GeoConfig {
    pub nominatim_url: String,
    pub overpass_url: String,
    pub user_agent: String,
    pub overpass_timeout_secs: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    /// Idle time after which a session is torn down.
    pub ttl_minutes: u64,
}

impl SessionConfig {
    pub const DEFAULT_TTL_MINUTES: u64 = 60;

    /// Saturates instead of overflowing for absurd TTLs.
    pub fn idle_ttl(&self) -> Duration {
        i64::try_from(self.ttl_minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .unwrap_or(Duration::MAX)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: Self::DEFAULT_TTL_MINUTES,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Anonymous 12 hex char id derived from the session, a per-session sequence
/// number and the creation instant.
pub fn generate_anonymous_id(session_id: Uuid, sequence: u64, at: DateTime<Utc>) -> String {
    let unique = format!(
        "{}-{}-{}",
        session_id,
        sequence,
        at.to_rfc3339_opts(SecondsFormat::Nanos, true)
    );
    let digest = Sha256::digest(unique.as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(12);
    id
}

/// Truncates `text` to at most `max_chars` characters, appending "..." when cut.
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ttl_is_in_minutes_and_saturates() {
        assert_eq!(SessionConfig::default().idle_ttl(), Duration::minutes(60));
        assert_eq!(SessionConfig { ttl_minutes: 5 }.idle_ttl(), Duration::minutes(5));
        assert_eq!(SessionConfig { ttl_minutes: u64::MAX }.idle_ttl(), Duration::MAX);
    }

    #[test]
    fn anonymous_id_is_twelve_hex_chars() {
        let id = generate_anonymous_id(Uuid::new_v4(), 0, Utc::now());
        assert_eq!(id.len(), 12);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn anonymous_id_changes_with_sequence_at_same_instant() {
        let session = Uuid::new_v4();
        let now = Utc::now();
        assert_ne!(
            generate_anonymous_id(session, 1, now),
            generate_anonymous_id(session, 2, now)
        );
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_for_display("itching", 100), "itching");
    }

    #[test]
    fn truncate_cuts_on_char_boundary() {
        let text = "खुजली".repeat(30);
        let truncated = truncate_for_display(&text, 100);
        assert_eq!(truncated.chars().count(), 103);
        assert!(truncated.ends_with("..."));
    }
}
