// ABOUTME: FunctionAgent - runs the think-act loop for a tool-calling model.
// ABOUTME: Executes requested tools concurrently and records each call.

use std::sync::Arc;

use futures::future::join_all;
use uuid::Uuid;

use super::output::{AgentOutput, ToolCallResult};
use crate::error::{AgentError, ToolError};
use crate::llm::{ContentBlock, LlmClient, Message, Request, Usage};
use crate::tool::{Registry, Tool, ToolResult, ToolSpec};

const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_MAX_ITERATIONS: usize = 20;
const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant. Use the available tools when they can answer the request.";

type ToolArgs = serde_json::Map<String, serde_json::Value>;

/// An agent that answers a prompt by calling tools until the model stops
/// asking for them.
pub struct FunctionAgent {
    client: Arc<dyn LlmClient>,
    tools: Registry,
    model: String,
    system_prompt: String,
    max_iterations: usize,
    max_tokens: Option<u32>,
    temperature: Option<f64>,
}

/// Builder for [`FunctionAgent`].
pub struct FunctionAgentBuilder {
    client: Arc<dyn LlmClient>,
    tools: Vec<Arc<dyn Tool>>,
    model: String,
    system_prompt: String,
    max_iterations: usize,
    max_tokens: Option<u32>,
    temperature: Option<f64>,
}

impl FunctionAgentBuilder {
    /// Add tools. If two tools share a name, the one added last is offered
    /// to the model and a warning is logged when the agent is built.
    pub fn tools(mut self, tools: impl IntoIterator<Item = Arc<dyn Tool>>) -> Self {
        self.tools.extend(tools);
        self
    }

    /// Add every tool a spec exposes.
    pub fn tool_spec(self, spec: &dyn ToolSpec) -> Self {
        self.tools(spec.to_tool_list())
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Maximum LLM round trips per run.
    pub fn max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn build(self) -> FunctionAgent {
        FunctionAgent {
            client: self.client,
            tools: self.tools.into_iter().collect(),
            model: self.model,
            system_prompt: self.system_prompt,
            max_iterations: self.max_iterations,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

impl FunctionAgent {
    /// Start building an agent backed by `client`.
    pub fn builder(client: Arc<dyn LlmClient>) -> FunctionAgentBuilder {
        FunctionAgentBuilder {
            client,
            tools: Vec::new(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_tokens: None,
            temperature: None,
        }
    }

    /// The tools this agent can call.
    pub fn registry(&self) -> &Registry {
        &self.tools
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run the agent on `prompt`. Each run starts a fresh conversation.
    pub async fn run(&self, prompt: &str) -> Result<AgentOutput, AgentError> {
        let run_id = Uuid::new_v4().to_string();
        let definitions = self.tools.to_definitions().await;
        let mut messages = vec![Message::user(prompt)];
        let mut tool_calls = Vec::new();
        let mut usage = Usage::default();

        tracing::debug!(
            %run_id,
            model = %self.model,
            tools = definitions.len(),
            "agent run started"
        );

        for iteration in 1..=self.max_iterations {
            let mut request = Request::new(&self.model)
                .system(&self.system_prompt)
                .messages(messages.clone())
                .tools(definitions.clone());
            if let Some(max_tokens) = self.max_tokens {
                request = request.max_tokens(max_tokens);
            }
            if let Some(temperature) = self.temperature {
                request = request.temperature(temperature);
            }

            let response = self.client.create_message(&request).await?;
            usage += response.usage;

            let calls = response
                .tool_uses()
                .into_iter()
                .map(|u| match u.input {
                    serde_json::Value::Object(args) => {
                        Ok((u.id.to_string(), u.name.to_string(), args.clone()))
                    }
                    other => Err(AgentError::InvalidToolArguments {
                        tool: u.name.to_string(),
                        arguments: other.clone(),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;

            if calls.is_empty() {
                tracing::debug!(
                    %run_id,
                    iteration,
                    calls = tool_calls.len(),
                    "agent run finished"
                );
                return Ok(AgentOutput {
                    run_id,
                    response: response.text(),
                    tool_calls,
                    usage,
                    iterations: iteration,
                });
            }

            let outputs = join_all(
                calls
                    .iter()
                    .map(|(_, name, args)| self.call_tool(&run_id, name, args)),
            )
            .await;

            messages.push(Message::assistant(response.content));

            let mut results = Vec::with_capacity(outputs.len());
            for ((tool_id, tool_name, tool_kwargs), output) in calls.into_iter().zip(outputs) {
                results.push(if output.is_error {
                    ContentBlock::tool_error(&tool_id, &output.content)
                } else {
                    ContentBlock::tool_result(&tool_id, &output.content)
                });
                tool_calls.push(ToolCallResult {
                    tool_id,
                    tool_name,
                    tool_kwargs,
                    tool_output: output,
                });
            }
            messages.push(Message::tool_results(results));
        }

        tracing::warn!(%run_id, max = self.max_iterations, "agent hit iteration limit");
        Err(AgentError::MaxIterations(self.max_iterations))
    }

    async fn call_tool(&self, run_id: &str, name: &str, args: &ToolArgs) -> ToolResult {
        let Some(tool) = self.tools.get(name).await else {
            tracing::warn!(run_id, tool = name, "model called unknown tool");
            return ToolResult::error(ToolError::NotFound(name.to_string()).to_string());
        };

        tracing::info!(run_id, tool = name, "calling tool");
        match tool.execute(serde_json::Value::Object(args.clone())).await {
            Ok(result) => {
                if result.is_error {
                    tracing::warn!(run_id, tool = name, "tool returned an error result");
                }
                result
            }
            Err(e) => {
                tracing::warn!(run_id, tool = name, error = %e, "tool failed");
                ToolResult::error(ToolError::Execution(e).to_string())
            }
        }
    }
}
