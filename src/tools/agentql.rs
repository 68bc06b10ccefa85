// ABOUTME: AgentQlRestApiToolSpec - exposes AgentQL REST extraction as an
// ABOUTME: agent tool named extract_web_data_with_rest_api.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::agentql::{AgentQlClient, QuerySource};
use crate::config::AgentQlConfig;
use crate::error::AgentQlError;
use crate::tool::{Tool, ToolResult, ToolSpec};

/// Name under which the extraction function is advertised.
pub const EXTRACT_WEB_DATA_WITH_REST_API: &str = "extract_web_data_with_rest_api";

const DESCRIPTION: &str = "Extract structured data from a web page using AgentQL. \
Provide the page URL and an AgentQL query describing the data to extract, for example \
`{ products[] { product_name product_price } }`. Returns the extracted data as JSON.";

/// Tool spec for the AgentQL REST API.
#[derive(Debug, Clone)]
pub struct AgentQlRestApiToolSpec {
    client: AgentQlClient,
}

impl AgentQlRestApiToolSpec {
    /// Create a spec for the given config.
    pub fn new(config: AgentQlConfig) -> Result<Self, AgentQlError> {
        Ok(Self::with_client(AgentQlClient::new(config)?))
    }

    /// Create a spec from `AGENTQL_API_KEY`.
    pub fn from_env() -> Result<Self, AgentQlError> {
        Ok(Self::with_client(AgentQlClient::from_env()?))
    }

    pub fn with_client(client: AgentQlClient) -> Self {
        Self { client }
    }

    /// Extract data from `url` with an AgentQL `query`. Both values are
    /// forwarded to AgentQL unchanged.
    pub async fn extract_web_data_with_rest_api(
        &self,
        url: &str,
        query: &str,
    ) -> Result<serde_json::Value, AgentQlError> {
        self.client.query(url, query).await
    }
}

impl ToolSpec for AgentQlRestApiToolSpec {
    fn spec_functions(&self) -> Vec<&'static str> {
        vec![EXTRACT_WEB_DATA_WITH_REST_API]
    }

    fn to_tool_list(&self) -> Vec<Arc<dyn Tool>> {
        vec![Arc::new(ExtractWebDataTool {
            client: self.client.clone(),
        })]
    }
}

/// The `extract_web_data_with_rest_api` tool.
pub struct ExtractWebDataTool {
    client: AgentQlClient,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Params {
    url: String,
    query: String,
}

#[async_trait]
impl Tool for ExtractWebDataTool {
    fn name(&self) -> &str {
        EXTRACT_WEB_DATA_WITH_REST_API
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "The URL of the public web page to extract data from"
                },
                "query": {
                    "type": "string",
                    "description": "AgentQL query used to extract the data"
                }
            },
            "required": ["url", "query"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        let params: Params = serde_json::from_value(params)?;

        match self
            .client
            .query_data(&params.url, QuerySource::Query(params.query))
            .await
        {
            Ok(response) => {
                let mut result = ToolResult::json(&response.data);
                if let Some(request_id) = response.metadata.request_id {
                    result = result.with_metadata("request_id", request_id);
                }
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(url = %params.url, error = %e, "extraction failed");
                Ok(ToolResult::error(e.to_string()))
            }
        }
    }
}
