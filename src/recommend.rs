//! Client for the recommendation service
//!
//! The service receives an issue title and description and answers with the
//! components and developers it predicts for the issue. Every way the call can
//! go wrong is reported as a [`FailureReason`] value rather than an error, so
//! the caller always gets something to put in the comment.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::RecommenderConfig;
use crate::error::Result;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub issue_title: String,
    pub issue_description: String,
}

impl RecommendationRequest {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            issue_title: title.into(),
            issue_description: description.into(),
        }
    }
}

/// Predictions for one issue, in the order the service ranked them
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecommendationResponse {
    pub recommended_components: Vec<String>,
    pub recommended_developers: Vec<String>,
}

/// Why no recommendation is available
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    #[error("recommendation service unreachable: {0}")]
    Network(String),

    #[error("recommendation service returned status {0}")]
    Status(u16),

    #[error("malformed recommendation response: {0}")]
    Malformed(String),
}

pub type Recommendation = std::result::Result<RecommendationResponse, FailureReason>;

pub struct RecommendationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RecommendationClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &RecommenderConfig) -> Result<Self> {
        Self::new(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the request once; no retry
    #[instrument(skip(self, request), fields(endpoint = %self.endpoint))]
    pub async fn recommend(&self, request: &RecommendationRequest) -> Recommendation {
        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(network_failure)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "recommendation service rejected request");
            return Err(FailureReason::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(network_failure)?;
        debug!(bytes = body.len(), "received recommendation");

        serde_json::from_str::<RecommendationResponse>(&body)
            .map_err(|e| FailureReason::Malformed(e.to_string()))
    }
}

fn network_failure(err: reqwest::Error) -> FailureReason {
    if err.is_timeout() {
        FailureReason::Network(format!("request timed out ({})", err))
    } else {
        FailureReason::Network(err.to_string())
    }
}
