// ABOUTME: AgentQlClient - issues query-data requests against the AgentQL
// ABOUTME: REST API and maps failures into AgentQlError.

use std::sync::Arc;

use super::types::error_message;
use super::{QueryDataRequest, QueryDataResponse, QuerySource};
use crate::config::AgentQlConfig;
use crate::error::AgentQlError;

fn ensure_api_key(config: &AgentQlConfig) -> Result<(), AgentQlError> {
    if config.api_key.trim().is_empty() {
        return Err(AgentQlError::MissingApiKey);
    }
    Ok(())
}

/// Client for the AgentQL REST API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AgentQlClient {
    config: Arc<AgentQlConfig>,
    http: reqwest::Client,
}

impl AgentQlClient {
    /// Create a client for the given config.
    pub fn new(config: AgentQlConfig) -> Result<Self, AgentQlError> {
        ensure_api_key(&config)?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    /// Create a client from `AGENTQL_API_KEY` (and `AGENTQL_API_BASE`).
    pub fn from_env() -> Result<Self, AgentQlError> {
        let config = AgentQlConfig::from_env().map_err(|_| AgentQlError::MissingApiKey)?;
        Self::new(config)
    }

    /// Create with a custom reqwest client. The config timeout is not applied.
    pub fn with_client(
        config: AgentQlConfig,
        http: reqwest::Client,
    ) -> Result<Self, AgentQlError> {
        ensure_api_key(&config)?;
        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    pub fn config(&self) -> &AgentQlConfig {
        &self.config
    }

    /// Extract data from `url`. `url` and the query text are sent as given.
    pub async fn query_data(
        &self,
        url: &str,
        source: QuerySource,
    ) -> Result<QueryDataResponse, AgentQlError> {
        let body = QueryDataRequest::new(url, source, &self.config);
        let endpoint = self.config.query_data_url();
        tracing::debug!(%endpoint, url, mode = ?self.config.mode, "querying AgentQL");

        let response = self
            .http
            .post(&endpoint)
            .header("X-API-Key", &self.config.api_key)
            .header("X-TF-Request-Origin", &self.config.request_origin)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown");
            let message = match response.text().await {
                Ok(text) if !text.trim().is_empty() => error_message(&text),
                Ok(_) => reason.to_string(),
                Err(e) => {
                    tracing::debug!(error = %e, "failed to read AgentQL error body");
                    reason.to_string()
                }
            };
            tracing::warn!(status = status.as_u16(), %message, url, "AgentQL request failed");
            return Err(AgentQlError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: QueryDataResponse = serde_json::from_slice(&bytes)?;
        tracing::debug!(request_id = ?parsed.metadata.request_id, "AgentQL query complete");
        Ok(parsed)
    }

    /// Run an AgentQL query against `url` and return only the data.
    pub async fn query(&self, url: &str, query: &str) -> Result<serde_json::Value, AgentQlError> {
        let response = self
            .query_data(url, QuerySource::Query(query.to_string()))
            .await?;
        Ok(response.data)
    }

    /// Describe the data wanted in natural language and return the data.
    pub async fn prompt(&self, url: &str, prompt: &str) -> Result<serde_json::Value, AgentQlError> {
        let response = self
            .query_data(url, QuerySource::Prompt(prompt.to_string()))
            .await?;
        Ok(response.data)
    }
}
