//! Network-backed clock with local fallback.

use std::time::Duration;

use chrono::{DateTime, Local, NaiveDateTime};
use examboard_core::{LocalClock, TimeProvider};
use serde::Deserialize;

/// Per-attempt timeout for network time lookups. Each tick is bounded
/// independently, so a slow endpoint can only delay its own tick.
const TIME_FETCH_TIMEOUT: Duration = Duration::from_secs(2);

/// World-time response; only the `datetime` field matters.
#[derive(Deserialize)]
struct WorldTimeResponse {
    datetime: String,
}

/// Prefers a world-time endpoint, degrading to the host clock.
///
/// Failures are logged as warnings and never surfaced to callers; the
/// board keeps ticking on local time.
pub struct NetworkClock {
    http: reqwest::Client,
    endpoint: String,
    fallback: LocalClock,
}

impl NetworkClock {
    pub fn new(endpoint: &str) -> Self {
        NetworkClock {
            http: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            fallback: LocalClock,
        }
    }

    async fn fetch_network_time(&self) -> anyhow::Result<NaiveDateTime> {
        let resp = self
            .http
            .get(&self.endpoint)
            .timeout(TIME_FETCH_TIMEOUT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("HTTP {status}");
        }

        let body: WorldTimeResponse = resp.json().await?;
        parse_world_time(&body.datetime)
    }
}

impl TimeProvider for NetworkClock {
    async fn now(&self) -> NaiveDateTime {
        match self.fetch_network_time().await {
            Ok(now) => now,
            Err(e) => {
                log::warn!("network time unavailable, using local clock: {e}");
                self.fallback.now().await
            }
        }
    }
}

/// Parse an ISO-8601 instant and resolve it to local wall time.
fn parse_world_time(datetime: &str) -> anyhow::Result<NaiveDateTime> {
    let parsed = DateTime::parse_from_rfc3339(datetime)?;
    Ok(parsed.with_timezone(&Local).naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_world_time_resolves_to_local() {
        // worldtimeapi-style payload value
        let parsed = parse_world_time("2026-08-07T14:30:05.123456+08:00").unwrap();
        let same_instant = DateTime::parse_from_rfc3339("2026-08-07T06:30:05.123456Z").unwrap();
        assert_eq!(parsed, same_instant.with_timezone(&Local).naive_local());
    }

    #[test]
    fn test_parse_world_time_rejects_garbage() {
        assert!(parse_world_time("yesterday-ish").is_err());
        assert!(parse_world_time("").is_err());
    }
}
