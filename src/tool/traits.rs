// ABOUTME: Defines the Tool trait and the ToolSpec capability - the seams
// ABOUTME: through which agents discover and invoke external functions.

use std::sync::Arc;

use async_trait::async_trait;

use super::ToolResult;

/// A single callable function exposed to an agent.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool, as advertised to the LLM.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the LLM.
    fn description(&self) -> &str;

    /// Returns the JSON Schema for the tool's input parameters.
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given parameters.
    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error>;
}

/// A tool specification: a bundle of related functions backed by one
/// service, which can be expanded into individual tools.
///
/// Generic registration code works against `dyn ToolSpec`, so specs for
/// different services can be listed and registered side by side.
pub trait ToolSpec: Send + Sync {
    /// Names of the functions this spec exposes, in listing order.
    fn spec_functions(&self) -> Vec<&'static str>;

    /// Expand the spec into one tool per spec function.
    fn to_tool_list(&self) -> Vec<Arc<dyn Tool>>;
}
