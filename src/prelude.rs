// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use agentql_tools::prelude::*;` to get started quickly.

pub use crate::agent::{AgentOutput, FunctionAgent, FunctionAgentBuilder, ToolCallResult};
pub use crate::agentql::{AgentQlClient, QueryDataResponse, QuerySource};
pub use crate::config::{AgentQlConfig, Credentials, LiveCredentials, Mode};
pub use crate::error::{AgentError, AgentQlError, ConfigError, LlmError, ToolError, ToolkitError};
pub use crate::llm::{
    ContentBlock, LlmClient, Message, OpenAIClient, Request, Response, Role, StopReason,
    ToolDefinition, Usage,
};
pub use crate::tool::{Registry, Tool, ToolResult, ToolSpec};
pub use crate::tools::{AgentQlRestApiToolSpec, EXTRACT_WEB_DATA_WITH_REST_API, ExtractWebDataTool};
