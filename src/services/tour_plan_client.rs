use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::transport::PlanTransport;
use crate::{
    config::TourGuideConfig,
    error::{FetchError, Result, TourGuideError},
    types::ItineraryRequest,
};

/// reqwest-backed transport posting to `<base_url>/api/tour-plan`.
///
/// One attempt per call; no retries and no Authorization header.
#[derive(Clone, Debug)]
pub struct HttpPlanTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpPlanTransport {
    pub fn new(config: &TourGuideConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|err| {
            TourGuideError::Config(format!("Failed to build HTTP client: {err}"))
        })?;

        Ok(Self {
            client,
            url: config.tour_plan_url(),
        })
    }
}

#[async_trait]
impl PlanTransport for HttpPlanTransport {
    async fn post_plan(
        &self,
        request: &ItineraryRequest,
    ) -> std::result::Result<Value, FetchError> {
        debug!(
            target: "tour_guide::http",
            url = %self.url,
            city = %request.city,
            days = request.days,
            "POST itinerary request"
        );

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Transport(format!("Failed to read response: {err}")))?;

        serde_json::from_str(&body)
            .map_err(|err| FetchError::Schema(format!("Failed to parse response body: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_transport_uses_configured_endpoint() {
        let config = TourGuideConfig::default()
            .with_base_url("http://127.0.0.1:8080/")
            .with_timeout(Some(Duration::from_secs(5)));
        let transport = HttpPlanTransport::new(&config).unwrap();
        assert_eq!(transport.url, "http://127.0.0.1:8080/api/tour-plan");
    }
}
