pub(crate) mod protocol;
pub(crate) mod registry;

use std::io::{BufRead, Write};

use anyhow::Result;
use serde_json::{Value, json};

use crate::config::Config;
use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use registry::{McpTool, ToolRegistry};

/// MCP protocol revision this server speaks
const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP Server implementation
///
/// Owns the tool registry and the server identity. One instance serves one
/// client over a pair of byte streams, fully synchronously: each request is
/// dispatched to completion before the next line is read.
pub(crate) struct McpServer {
    server_name: String,
    server_version: String,
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(config: &Config, registry: ToolRegistry) -> Self {
        Self {
            server_name: config.server.name.clone(),
            server_version: config.server.version.clone(),
            registry,
        }
    }

    /// Run the serve loop until end-of-stream.
    ///
    /// One JSON document per input line; blank lines are skipped without a
    /// response. Every emitted response is exactly one JSON document plus a
    /// newline - nothing else may ever be written to `writer`, or the client
    /// is permanently broken.
    pub async fn serve<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<()> {
        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };

            if line.trim().is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(r) => r,
                Err(e) => {
                    let response = JsonRpcResponse::error(
                        Value::Null,
                        -32700,
                        format!("Parse error: {}", e),
                    );
                    writeln!(writer, "{}", serde_json::to_string(&response)?)?;
                    writer.flush()?;
                    continue;
                }
            };

            if let Some(response) = self.handle_request(request).await {
                writeln!(writer, "{}", serde_json::to_string(&response)?)?;
                writer.flush()?;
            }
        }

        Ok(())
    }

    /// Handle one parsed request; returns `None` for notifications
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        tracing::debug!(method = %request.method, "handling request");

        // Acknowledgement notifications are no-ops even when a client
        // erroneously attaches an id. Cancellation is accepted but inert:
        // every call already runs to completion before the next read.
        if matches!(
            request.method.as_str(),
            "notifications/initialized" | "notifications/cancelled"
        ) {
            return None;
        }

        // Anything else without an id is a notification: never answered,
        // regardless of outcome.
        let id = request.id?;

        let result = match request.method.as_str() {
            "initialize" => Ok(self.handle_initialize()),
            "tools/list" => Ok(self.handle_tools_list()),
            "tools/call" => self.handle_tools_call(&request.params),
            other => Err(JsonRpcError {
                code: -32601,
                message: format!("Method not found: {}", other),
                data: None,
            }),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::error(id, error.code, error.message),
        })
    }

    fn handle_initialize(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.server_name,
                "version": self.server_version
            }
        })
    }

    fn handle_tools_list(&self) -> Value {
        let tools: Vec<protocol::Tool> =
            self.registry.list().iter().map(|t| t.describe()).collect();
        json!({ "tools": tools })
    }

    fn handle_tools_call(&self, params: &Value) -> Result<Value, JsonRpcError> {
        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        let Some(tool) = self.registry.lookup(name) else {
            return Err(JsonRpcError {
                code: -32602,
                message: format!("Method not found: {}", name),
                data: None,
            });
        };

        tracing::debug!(tool = name, "invoking tool");
        Ok(wrap_content(tool.call(&arguments.to_string())))
    }
}

/// Normalize a tool's return value into an MCP content result.
///
/// A pre-shaped content array (every element an object with a string `type`
/// field) passes through unchanged; any other value is wrapped as a single
/// text item.
fn wrap_content(value: Value) -> Value {
    let is_content_array = value.as_array().is_some_and(|items| {
        items
            .iter()
            .all(|item| item.get("type").and_then(Value::as_str).is_some())
    });

    if is_content_array {
        json!({ "content": value })
    } else {
        json!({ "content": [{ "type": "text", "text": value }] })
    }
}
