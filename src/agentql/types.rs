// ABOUTME: Wire types for the AgentQL query-data endpoint.

use serde::{Deserialize, Serialize};

use crate::config::{AgentQlConfig, MAX_WAIT_FOR_SECS, Mode};

/// What to extract: an AgentQL query, or a natural-language prompt that
/// AgentQL turns into a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySource {
    Query(String),
    Prompt(String),
}

/// Page-handling parameters.
#[derive(Debug, Clone, Serialize)]
pub struct QueryParams {
    pub wait_for: u64,
    pub is_scroll_to_bottom_enabled: bool,
    pub mode: Mode,
    pub is_screenshot_enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestMetadata {
    pub experimental_stealth_mode_enabled: bool,
}

/// Body of `POST /v1/query-data`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryDataRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    pub params: QueryParams,
    pub metadata: RequestMetadata,
}

impl QueryDataRequest {
    pub fn new(url: impl Into<String>, source: QuerySource, config: &AgentQlConfig) -> Self {
        let (query, prompt) = match source {
            QuerySource::Query(q) => (Some(q), None),
            QuerySource::Prompt(p) => (None, Some(p)),
        };
        Self {
            url: url.into(),
            query,
            prompt,
            params: QueryParams {
                wait_for: config.wait_for.min(MAX_WAIT_FOR_SECS),
                is_scroll_to_bottom_enabled: config.scroll_to_bottom,
                mode: config.mode,
                is_screenshot_enabled: config.screenshot,
            },
            metadata: RequestMetadata {
                experimental_stealth_mode_enabled: config.stealth_mode,
            },
        }
    }
}

/// Metadata AgentQL returns alongside the data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub request_id: Option<String>,
    /// Base64 screenshot, present when screenshots are enabled.
    #[serde(default)]
    pub screenshot: Option<String>,
}

/// Successful response from `POST /v1/query-data`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryDataResponse {
    pub data: serde_json::Value,
    #[serde(default)]
    pub metadata: ResponseMetadata,
}

/// Pull a human-readable message out of an error body. AgentQL reports
/// `error_info`, FastAPI-style validation errors use `detail`.
pub(crate) fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };
    for key in ["error_info", "detail"] {
        match value.get(key) {
            Some(serde_json::Value::String(s)) => return s.clone(),
            Some(v) if !v.is_null() => return v.to_string(),
            _ => {}
        }
    }
    body.to_string()
}
