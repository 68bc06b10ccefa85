// ABOUTME: Root module for agentql-tools - AgentQL extraction as agent tools.
// ABOUTME: Re-exports all public types from submodules.

pub mod agent;
pub mod agentql;
pub mod config;
pub mod error;
pub mod llm;
pub mod prelude;
pub mod tool;
pub mod tools;

pub use error::ToolkitError;
