// ABOUTME: Agent module - a function-calling agent that drives an LLM
// ABOUTME: through tool use and records every call it makes.

mod function;
mod output;

pub use function::{FunctionAgent, FunctionAgentBuilder};
pub use output::{AgentOutput, ToolCallResult};
