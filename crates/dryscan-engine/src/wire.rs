//! Wire types for the BigQuery jobs API.

use serde::{Deserialize, Serialize};

/// Dry-run job insertion request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DryRunRequest {
    configuration: JobConfiguration,
}

impl DryRunRequest {
    /// Builds a dry-run request for the given query text.
    pub(crate) fn new(query_text: &str) -> Self {
        Self {
            configuration: JobConfiguration {
                query: QueryConfiguration {
                    query: query_text.to_string(),
                    use_legacy_sql: false,
                    use_query_cache: false,
                },
                dry_run: true,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JobConfiguration {
    query: QueryConfiguration,
    dry_run: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryConfiguration {
    query: String,
    use_legacy_sql: bool,
    use_query_cache: bool,
}

/// Dry-run job response; only the statistics block is of interest.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DryRunResponse {
    statistics: Option<JobStatistics>,
}

impl DryRunResponse {
    /// Returns the string-encoded byte count the job would process.
    pub(crate) fn total_bytes_processed(&self) -> Option<&str> {
        self.statistics
            .as_ref()
            .and_then(|stats| stats.total_bytes_processed.as_deref())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobStatistics {
    total_bytes_processed: Option<String>,
}

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Extracts the engine's diagnostic message from an error response body,
/// falling back to the raw body when it is not the standard envelope.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorResponse>(body)
        .map_or_else(|_| body.trim().to_string(), |response| response.error.message)
}
