// ABOUTME: AgentQL module - REST client for the AgentQL query-data API.
// ABOUTME: Turns a URL plus an AgentQL query or prompt into structured JSON.

mod client;
mod types;

pub use client::*;
pub use types::*;
