// TimeLog Viewer - app/client.rs
//
// HTTP access to the backend's `/logs` endpoint.
//
// `LogSource` is the seam between the fetch worker and the network so the
// worker can be driven by an in-memory source in tests.

use crate::core::model::{LogEntry, LogFilter};
use crate::core::query;
use crate::util::constants;
use crate::util::error::FetchError;
use std::time::Duration;

/// Anything that can answer a filtered logs query.
pub trait LogSource: Send + Sync {
    /// Fetch the entries matching `filter`, in backend order.
    fn fetch_logs(&self, filter: &LogFilter) -> Result<Vec<LogEntry>, FetchError>;
}

/// `LogSource` backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpLogSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpLogSource {
    /// Build a client for `base_url` with a whole-request `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(format!(
                "{}/{}",
                constants::APP_ID,
                constants::APP_VERSION
            ))
            .build()
            .map_err(|source| FetchError::Client { source })?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl LogSource for HttpLogSource {
    fn fetch_logs(&self, filter: &LogFilter) -> Result<Vec<LogEntry>, FetchError> {
        let url = query::build_logs_url(&self.base_url, filter);
        tracing::debug!(%url, "Requesting logs");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| FetchError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response.bytes().map_err(|source| FetchError::Body {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            tracing::warn!(
                base_url = %self.base_url,
                status = status.as_u16(),
                "Backend returned an error status"
            );
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
                body_preview: preview(&String::from_utf8_lossy(&body)),
            });
        }

        // from_slice rejects invalid UTF-8 instead of substituting U+FFFD.
        let entries: Vec<LogEntry> =
            serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
                url: url.clone(),
                source,
            })?;

        tracing::info!(base_url = %self.base_url, entries = entries.len(), "Logs fetched");
        Ok(entries)
    }
}

/// First line of `body`, capped at `MAX_ERROR_BODY_PREVIEW` characters.
fn preview(body: &str) -> String {
    let first_line = body.trim().lines().next().unwrap_or("");
    let mut out: String = first_line
        .chars()
        .take(constants::MAX_ERROR_BODY_PREVIEW)
        .collect();
    if first_line.chars().count() > constants::MAX_ERROR_BODY_PREVIEW {
        out.push('\u{2026}');
    }
    out
}
