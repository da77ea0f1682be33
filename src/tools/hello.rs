use serde_json::{Value, json};

use crate::mcp::protocol::Tool;
use crate::mcp::registry::McpTool;

/// Greets a user by name, optionally mentioning their birthday
pub(crate) struct HelloTool;

impl HelloTool {
    fn greeting(arguments: &Value) -> String {
        let mut name = arguments
            .get("value")
            .and_then(|v| v.as_str())
            .unwrap_or("World")
            .to_string();

        let birthday = arguments
            .get("birthday")
            .and_then(|v| v.as_str())
            .unwrap_or("");
        if !birthday.is_empty() {
            name.push_str(&format!(" (born on {})", birthday));
        }

        format!("Hello {}!", name)
    }
}

impl McpTool for HelloTool {
    fn name(&self) -> &str {
        "HelloTool"
    }

    fn describe(&self) -> Tool {
        Tool {
            name: self.name().to_string(),
            description: "A tool that greets users".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "value": {
                        "type": "string",
                        "description": "User name to greet"
                    },
                    "birthday": {
                        "type": "string",
                        "description": "User's birthday"
                    }
                },
                "required": ["value"]
            }),
        }
    }

    fn call(&self, arguments: &str) -> Value {
        let arguments: Value = match serde_json::from_str(arguments) {
            Ok(v) => v,
            Err(_) => {
                return json!([{"type": "text", "text": "Error: Invalid arguments"}]);
            }
        };

        json!([{"type": "text", "text": Self::greeting(&arguments)}])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greets_by_name() {
        let result = HelloTool.call(r#"{"value":"Ada"}"#);
        assert_eq!(result[0]["type"], "text");
        assert_eq!(result[0]["text"], "Hello Ada!");
    }

    #[test]
    fn test_defaults_to_world() {
        let result = HelloTool.call("{}");
        assert_eq!(result[0]["text"], "Hello World!");
    }

    #[test]
    fn test_includes_birthday() {
        let result = HelloTool.call(r#"{"value":"Ada","birthday":"1815-12-10"}"#);
        assert_eq!(result[0]["text"], "Hello Ada (born on 1815-12-10)!");
    }

    #[test]
    fn test_invalid_arguments_reported_as_content() {
        let result = HelloTool.call("not json");
        assert_eq!(result[0]["text"], "Error: Invalid arguments");
    }

    #[test]
    fn test_descriptor_requires_value() {
        let descriptor = HelloTool.describe();
        assert_eq!(descriptor.name, "HelloTool");
        assert_eq!(descriptor.input_schema["required"], json!(["value"]));
    }
}
