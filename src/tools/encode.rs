use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::{Value, json};

use crate::mcp::protocol::Tool;
use crate::mcp::registry::McpTool;

/// Returns a file as an MCP resource content item.
///
/// Text-like files are embedded inline; anything else is base64-encoded.
pub(crate) struct EncodeFileTool;

/// MIME type from the file extension; unknown extensions are treated as
/// opaque binary
fn mime_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "c" => "text/x-csrc",
        "h" | "hh" | "hpp" => "text/x-c++hdr",
        "cpp" | "cxx" | "cc" => "text/x-c++src",
        "rs" => "text/x-rust",
        "go" => "text/x-go",
        "py" => "text/x-python",
        "java" => "text/x-java",
        "js" => "text/javascript",
        "ts" => "text/typescript",
        "html" => "text/html",
        "css" => "text/css",
        "xml" => "text/xml",
        "md" => "text/markdown",
        "txt" => "text/plain",
        "json" => "application/json",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Build the resource payload for a file, or a human-readable reason why it
/// could not be read
fn encode_file(path: &str) -> Result<Value, String> {
    let bytes = std::fs::read(path).map_err(|_| format!("Could not read file: {}", path))?;
    if bytes.is_empty() {
        return Err(format!("Could not read file: {}", path));
    }

    let mime = mime_type(Path::new(path));
    let mut resource = json!({
        "uri": format!("file://{}", path),
        "mimeType": mime,
    });

    if mime.starts_with("text/") || mime == "application/json" {
        resource["text"] = json!(String::from_utf8_lossy(&bytes));
    } else {
        resource["data"] = json!(BASE64.encode(&bytes));
    }

    Ok(resource)
}

impl McpTool for EncodeFileTool {
    fn name(&self) -> &str {
        "EncodeFile"
    }

    fn describe(&self) -> Tool {
        Tool {
            name: self.name().to_string(),
            description: "Reads a file and returns it as a resource (inline text or base64)"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Path of the file to encode"
                    }
                },
                "required": ["path"]
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

        let Some(path) = arguments.get("path").and_then(|v| v.as_str()) else {
            return json!([{"type": "text", "text": "Error: Missing 'path' argument"}]);
        };

        match encode_file(path) {
            Ok(resource) => json!([{"type": "resource", "resource": resource}]),
            Err(reason) => json!([{"type": "text", "text": format!("Error: {}", reason)}]),
        }
    }
}
