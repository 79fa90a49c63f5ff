//! HTTP implementation of the schedule source.

use crate::error::{PlanviewError, Result};
use crate::schedule::ScheduleResponse;
use crate::source::ScheduleSource;
use async_trait::async_trait;

/// Fixed endpoint path for the monthly schedule; no query, headers, or body.
pub const MONTHLY_SCHEDULE_PATH: &str = "/api/schedule/monthly";

/// Fetches the monthly schedule from the dashboard over HTTP.
pub struct HttpScheduleSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpScheduleSource {
    /// Create a source against a dashboard base URL, e.g. `http://127.0.0.1:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a source with a caller-supplied client (custom TLS, proxies).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn monthly_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            MONTHLY_SCHEDULE_PATH
        )
    }
}

#[async_trait]
impl ScheduleSource for HttpScheduleSource {
    async fn fetch_monthly(&self) -> Result<ScheduleResponse> {
        let url = self.monthly_url();
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| PlanviewError::network("schedule request failed", err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlanviewError::transport(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|err| PlanviewError::network("failed to read schedule body", err))?;

        Ok(serde_json::from_str(&body)?)
    }
}
