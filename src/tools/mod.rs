// ABOUTME: Built-in tool specs for common agent operations.
// ABOUTME: Currently web data extraction through AgentQL.

mod agentql;

pub use agentql::{AgentQlRestApiToolSpec, EXTRACT_WEB_DATA_WITH_REST_API, ExtractWebDataTool};
