//! HTTP client submitting dry-run jobs to the engine.

use std::time::Duration;

use async_trait::async_trait;
use dryscan_types::ScanEstimate;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::estimator::QueryEstimator;
use crate::token::AccessToken;
use crate::wire;

/// Default jobs API endpoint.
const DEFAULT_BASE_URL: &str = "https://bigquery.googleapis.com/bigquery/v2";

/// Configuration for the engine client.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Cloud project the dry-run jobs are billed against.
    pub project_id: String,
    /// Base URL of the jobs API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl EngineConfig {
    /// Creates a configuration for the given project with default endpoint
    /// and timeout.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
            user_agent: format!("dryscan/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur talking to the engine.
///
/// These are the unrecovered faults: a query the engine merely rejects is a
/// [`ScanEstimate::Failed`] result, not an error.
#[derive(Error, Debug)]
pub enum EngineError {
    /// HTTP transport failure (connectivity, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credentials were rejected.
    #[error("Authentication failed (HTTP {status}): {message}")]
    Auth {
        /// HTTP status code (401 or 403).
        status: u16,
        /// Diagnostic message from the engine.
        message: String,
    },

    /// The engine returned a server-side error.
    #[error("Engine error (HTTP {status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Diagnostic message from the engine.
        message: String,
    },

    /// The response did not carry the expected job statistics.
    #[error("Malformed engine response: {0}")]
    MalformedResponse(String),

    /// The response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// HTTP client submitting dry-run jobs to the BigQuery jobs API.
#[derive(Debug, Clone)]
pub struct EngineClient {
    client: Client,
    config: EngineConfig,
    token: AccessToken,
}

impl EngineClient {
    /// Creates a new engine client with the given configuration and token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: EngineConfig, token: AccessToken) -> Result<Self, EngineError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self {
            client,
            config,
            token,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Submits the query as a dry-run job and returns the scan estimate.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, auth, or server faults.
    pub async fn dry_run(&self, query_text: &str) -> Result<ScanEstimate, EngineError> {
        let url = format!(
            "{}/projects/{}/jobs",
            self.config.base_url, self.config.project_id
        );
        let request = wire::DryRunRequest::new(query_text);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.token.secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        outcome_from_response(status, &body)
    }
}

#[async_trait]
impl QueryEstimator for EngineClient {
    async fn estimate(&self, query_text: &str) -> Result<ScanEstimate, EngineError> {
        self.dry_run(query_text).await
    }
}

/// Classifies an engine response into an estimate or a fault.
///
/// Auth rejections (401/403) and server errors are faults; any other client
/// error is the engine rejecting the query itself.
fn outcome_from_response(status: StatusCode, body: &str) -> Result<ScanEstimate, EngineError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(EngineError::Auth {
            status: status.as_u16(),
            message: wire::error_message(body),
        });
    }

    if status.is_client_error() {
        return Ok(ScanEstimate::failed(wire::error_message(body)));
    }

    if !status.is_success() {
        return Err(EngineError::Server {
            status: status.as_u16(),
            message: wire::error_message(body),
        });
    }

    let response: wire::DryRunResponse = serde_json::from_str(body)?;
    let bytes = response.total_bytes_processed().ok_or_else(|| {
        EngineError::MalformedResponse("job statistics missing totalBytesProcessed".to_string())
    })?;
    let bytes = bytes.parse::<u64>().map_err(|_| {
        EngineError::MalformedResponse(format!("invalid totalBytesProcessed: {bytes}"))
    })?;

    Ok(ScanEstimate::Scanned(bytes))
}
