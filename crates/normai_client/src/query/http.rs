use normai_core::domain::{QueryOutput, QueryRequest};
use normai_core::error::AppError;
use serde::Deserialize;

use super::QueryService;
use crate::config::ClientConfig;

/// Blocking client for the service's `GET /query?query=...` endpoint.
#[derive(Debug, Clone)]
pub struct HttpQueryClient {
    config: ClientConfig,
}

impl HttpQueryClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/query", self.config.base_url())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Pull the `detail` message out of an error response body, if it has one.
pub fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.detail.filter(|d| !d.trim().is_empty())
}

impl QueryService for HttpQueryClient {
    fn query(&self, req: &QueryRequest) -> Result<QueryOutput, AppError> {
        let url = self.endpoint();
        tracing::debug!(%url, query_len = req.as_str().len(), "sending query");

        let resp = ureq::get(&url)
            .timeout(self.config.timeout())
            .query("query", req.as_str())
            .call();

        match resp {
            Ok(r) => {
                let raw = r.into_string().map_err(|e| {
                    AppError::new("QUERY_RESPONSE_INVALID", "Failed to read query response")
                        .with_details(e.to_string())
                })?;
                let output = QueryOutput::from_json(&raw)?;
                tracing::debug!(citations = output.citations.len(), "query answered");
                Ok(output)
            }
            Err(ureq::Error::Status(status, r)) => {
                let body = r.into_string().unwrap_or_else(|e| {
                    tracing::debug!(status, error = %e, "failed to read error body");
                    String::new()
                });
                let message = error_detail(&body).unwrap_or_else(|| "Failed to fetch".to_string());
                tracing::warn!(status, %message, "query rejected");
                Err(AppError::new("QUERY_FAILED", message)
                    .with_details(format!("status={status}"))
                    .with_retryable(status >= 500))
            }
            Err(e) => {
                tracing::warn!(error = %e, "query service unreachable");
                Err(AppError::new("QUERY_UNREACHABLE", "Failed to reach the query service")
                    .with_details(e.to_string())
                    .with_retryable(true))
            }
        }
    }
}
