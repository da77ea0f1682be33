pub(crate) mod encode;
pub(crate) mod hello;

use crate::mcp::registry::ToolRegistry;

/// Registry with the standard tool set, in the order clients see it
pub(crate) fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(hello::HelloTool));
    registry.register(Box::new(encode::EncodeFileTool));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contents() {
        let registry = default_registry();
        assert_eq!(registry.len(), 2);
        assert!(registry.lookup("HelloTool").is_some());
        assert!(registry.lookup("EncodeFile").is_some());
    }
}
