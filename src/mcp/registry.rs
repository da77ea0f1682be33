use serde_json::Value;

use super::protocol::Tool;

/// Contract every tool exposed over MCP must satisfy.
///
/// `call` receives the raw JSON arguments object serialized to text. A tool
/// must not let its own argument parsing escape as an error: bad input is
/// reported as a content item whose text starts with "Error: ", so the
/// protocol layer still sees a successful call.
pub(crate) trait McpTool: Send {
    /// Unique name used for `tools/call` routing
    fn name(&self) -> &str;

    /// Descriptor advertised via `tools/list`
    fn describe(&self) -> Tool;

    /// Execute the tool; returns either a bare JSON value or a pre-shaped
    /// content array
    fn call(&self, arguments: &str) -> Value;
}

/// Owning collection of registered tools.
///
/// Populated once before the serve loop starts and read-only afterwards.
/// Iteration order is insertion order and stable within a run.
pub(crate) struct ToolRegistry {
    tools: Vec<Box<dyn McpTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Insert a tool, replacing any existing binding with the same name
    /// (last registration wins)
    pub fn register(&mut self, tool: Box<dyn McpTool>) {
        match self.tools.iter_mut().find(|t| t.name() == tool.name()) {
            Some(slot) => *slot = tool,
            None => self.tools.push(tool),
        }
    }

    /// Find a tool by name
    pub fn lookup(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
    }

    /// All registered tools, in registration order
    pub fn list(&self) -> Vec<&dyn McpTool> {
        self.tools.iter().map(|t| t.as_ref()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FakeTool {
        name: &'static str,
        reply: &'static str,
    }

    impl McpTool for FakeTool {
        fn name(&self) -> &str {
            self.name
        }

        fn describe(&self) -> Tool {
            Tool {
                name: self.name.to_string(),
                description: "test tool".to_string(),
                input_schema: json!({"type": "object"}),
            }
        }

        fn call(&self, _arguments: &str) -> Value {
            json!(self.reply)
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(FakeTool {
            name: "alpha",
            reply: "a",
        }));

        assert!(registry.lookup("alpha").is_some());
        assert!(registry.lookup("beta").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_overwrites() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(FakeTool {
            name: "alpha",
            reply: "first",
        }));
        registry.register(Box::new(FakeTool {
            name: "alpha",
            reply: "second",
        }));

        assert_eq!(registry.len(), 1);
        let tool = registry.lookup("alpha").unwrap();
        assert_eq!(tool.call("{}"), json!("second"));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut registry = ToolRegistry::new();
        for name in ["zebra", "apple", "mango"] {
            registry.register(Box::new(FakeTool { name, reply: "" }));
        }

        let names: Vec<&str> = registry.list().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.list().is_empty());
    }
}
