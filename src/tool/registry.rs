// ABOUTME: Implements the Registry - a thread-safe container for discovering
// ABOUTME: and managing available tools at runtime.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::{Tool, ToolSpec};
use crate::llm::ToolDefinition;

/// A thread-safe registry of tools, keyed by tool name.
#[derive(Default)]
pub struct Registry {
    tools: Arc<RwLock<HashMap<String, Arc<dyn Tool>>>>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Replaces any tool with the same name.
    pub async fn register<T: Tool + 'static>(&self, tool: T) {
        self.register_arc(Arc::new(tool)).await;
    }

    /// Register a tool from an Arc. Replaces any tool with the same name.
    pub async fn register_arc(&self, tool: Arc<dyn Tool>) {
        let mut tools = self.tools.write().await;
        insert_tool(&mut tools, tool);
    }

    /// Register every tool a spec exposes. Returns how many were added.
    /// A tool whose name is already registered replaces the earlier one.
    pub async fn register_spec(&self, spec: &dyn ToolSpec) -> usize {
        let list = spec.to_tool_list();
        let count = list.len();
        let mut tools = self.tools.write().await;
        for tool in list {
            tracing::debug!(tool = tool.name(), "registering tool");
            insert_tool(&mut tools, tool);
        }
        count
    }

    /// Unregister a tool by name.
    pub async fn unregister(&self, name: &str) {
        let mut tools = self.tools.write().await;
        tools.remove(name);
    }

    /// Get a tool by name.
    pub async fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let tools = self.tools.read().await;
        tools.get(name).cloned()
    }

    /// List all tool names, sorted alphabetically.
    pub async fn list(&self) -> Vec<String> {
        let tools = self.tools.read().await;
        let mut names: Vec<_> = tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get all registered tools.
    pub async fn all(&self) -> Vec<Arc<dyn Tool>> {
        let tools = self.tools.read().await;
        tools.values().cloned().collect()
    }

    /// Get the number of registered tools.
    pub async fn count(&self) -> usize {
        let tools = self.tools.read().await;
        tools.len()
    }

    /// Convert all tools to LLM tool definitions, sorted by name.
    pub async fn to_definitions(&self) -> Vec<ToolDefinition> {
        let tools = self.tools.read().await;
        let mut defs: Vec<_> = tools
            .values()
            .map(|t| ToolDefinition::from_tool(t.as_ref()))
            .collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }
}

fn insert_tool(tools: &mut HashMap<String, Arc<dyn Tool>>, tool: Arc<dyn Tool>) {
    let name = tool.name().to_string();
    if tools.insert(name.clone(), tool).is_some() {
        tracing::warn!(tool = %name, "duplicate tool name, replacing earlier registration");
    }
}

/// Later tools replace earlier ones with the same name.
impl FromIterator<Arc<dyn Tool>> for Registry {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Tool>>>(iter: I) -> Self {
        let mut tools = HashMap::new();
        for tool in iter {
            insert_tool(&mut tools, tool);
        }
        Self {
            tools: Arc::new(RwLock::new(tools)),
        }
    }
}

impl Clone for Registry {
    fn clone(&self) -> Self {
        Self {
            tools: Arc::clone(&self.tools),
        }
    }
}
