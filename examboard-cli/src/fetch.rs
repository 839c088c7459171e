//! Fetching raw datasets from URLs or local files.

use std::time::Duration;

use examboard_core::{ExamBoardError, ExamBoardResult, RecordFetcher};

/// Per-request timeout for data source fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches dataset text over HTTP(S) or from the local filesystem.
///
/// The reqwest client pools connections, so repeated refreshes against
/// the same host reuse them.
pub struct SourceFetcher {
    http: reqwest::Client,
}

impl SourceFetcher {
    pub fn new() -> Self {
        SourceFetcher {
            http: reqwest::Client::new(),
        }
    }
}

impl RecordFetcher for SourceFetcher {
    async fn fetch(&self, source: &str) -> ExamBoardResult<String> {
        log::debug!("fetching dataset from {source}");

        if is_url(source) {
            let resp = self
                .http
                .get(source)
                .timeout(FETCH_TIMEOUT)
                .send()
                .await
                .map_err(|e| transport(source, e.to_string()))?;

            let status = resp.status();
            if !status.is_success() {
                return Err(transport(source, format!("HTTP {status}")));
            }

            resp.text()
                .await
                .map_err(|e| transport(source, e.to_string()))
        } else {
            tokio::fs::read_to_string(source)
                .await
                .map_err(|e| transport(source, e.to_string()))
        }
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn transport(source: &str, reason: String) -> ExamBoardError {
    ExamBoardError::Transport {
        resource: source.to_string(),
        reason,
    }
}
