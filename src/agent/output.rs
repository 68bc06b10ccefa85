// ABOUTME: Records produced by an agent run - the final answer plus every
// ABOUTME: tool call the model made, with its arguments and output.

use crate::llm::Usage;
use crate::tool::ToolResult;

/// One tool invocation made by the agent.
#[derive(Debug, Clone)]
pub struct ToolCallResult {
    /// Provider-assigned id of the call.
    pub tool_id: String,

    /// Name of the tool the model called.
    pub tool_name: String,

    /// Arguments exactly as the model supplied them.
    pub tool_kwargs: serde_json::Map<String, serde_json::Value>,

    /// What the tool returned. Failures are recorded here as error results.
    pub tool_output: ToolResult,
}

impl ToolCallResult {
    /// The arguments as a JSON object value.
    pub fn kwargs_value(&self) -> serde_json::Value {
        serde_json::Value::Object(self.tool_kwargs.clone())
    }
}

/// Result of `FunctionAgent::run`.
#[derive(Debug, Clone)]
pub struct AgentOutput {
    /// Identifier of this run, for correlating log lines.
    pub run_id: String,

    /// Final text response from the model.
    pub response: String,

    /// Tool calls in the order the model issued them.
    pub tool_calls: Vec<ToolCallResult>,

    /// Token usage summed over every LLM call in the run.
    pub usage: Usage,

    /// Number of LLM round trips.
    pub iterations: usize,
}

impl AgentOutput {
    /// Tool calls made to the named tool.
    pub fn calls_to<'a>(
        &'a self,
        tool_name: &'a str,
    ) -> impl Iterator<Item = &'a ToolCallResult> {
        self.tool_calls
            .iter()
            .filter(move |c| c.tool_name == tool_name)
    }
}
