//! MCP server implementation
//!
//! Implements the Model Context Protocol server for stdio transport.

use std::io::{BufRead, Write};

use serde_json::Value;

use crate::error::Result;
use crate::mcp::tools::ToolHandler;
use crate::mcp::types::*;

/// MCP server info
const SERVER_NAME: &str = "weather-widget";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP server for widget tools
pub struct McpServer {
    /// Whether initialized
    initialized: bool,
}

impl McpServer {
    /// Create a new MCP server
    pub fn new() -> Self {
        Self { initialized: false }
    }

    /// Run the server on stdio
    pub async fn run_stdio(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        let reader = stdin.lock();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match self.handle_message(&line).await {
                Ok(Some(response)) => {
                    let response_str = serde_json::to_string(&response)?;
                    writeln!(stdout, "{}", response_str)?;
                    stdout.flush()?;
                }
                Ok(None) => {
                    // Notification, no response needed
                }
                Err(e) => {
                    tracing::error!("Error handling message: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Handle an incoming JSON-RPC message
    pub async fn handle_message(&mut self, message: &str) -> Result<Option<JsonRpcResponse>> {
        let request: JsonRpcRequest = match serde_json::from_str(message) {
            Ok(req) => req,
            Err(e) => {
                return Ok(Some(JsonRpcResponse::error(
                    RequestId::Number(0),
                    JsonRpcError::parse_error(e.to_string()),
                )));
            }
        };

        Ok(self.handle_request(request).await)
    }

    /// Handle a parsed JSON-RPC request
    pub async fn handle_request(&mut self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        tracing::debug!(method = %request.method, "dispatching request");

        match request.method.as_str() {
            methods::INITIALIZE => {
                let result = self.handle_initialize();
                Some(JsonRpcResponse::success(request.id, result))
            }
            methods::INITIALIZED => {
                self.initialized = true;
                None // Notification, no response
            }
            methods::PING => Some(JsonRpcResponse::success(
                request.id,
                serde_json::json!({}),
            )),
            methods::LIST_TOOLS => {
                let result = ListToolsResult {
                    tools: ToolHandler::from_env().list_tools(),
                };
                Some(json_result(request.id, &result))
            }
            methods::CALL_TOOL => Some(self.handle_call_tool(request).await),
            methods::LIST_RESOURCES => {
                let result = ListResourcesResult {
                    resources: ToolHandler::from_env().list_resources(),
                };
                Some(json_result(request.id, &result))
            }
            methods::READ_RESOURCE => Some(self.handle_read_resource(request).await),
            _ => Some(JsonRpcResponse::error(
                request.id,
                JsonRpcError::method_not_found(&request.method),
            )),
        }
    }

    /// Handle initialize request
    fn handle_initialize(&self) -> Value {
        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {}),
                resources: Some(ResourcesCapability::default()),
            },
        };

        serde_json::to_value(result).unwrap_or_default()
    }

    /// Handle call tool request
    async fn handle_call_tool(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let params: CallToolParams = match request.params {
            Some(p) => match serde_json::from_value(p) {
                Ok(params) => params,
                Err(e) => {
                    let result =
                        CallToolResult::error(format!("Invalid tool parameters: {}", e));
                    return json_result(request.id, &result);
                }
            },
            None => {
                let result = CallToolResult::error("Missing tool parameters");
                return json_result(request.id, &result);
            }
        };

        // Fresh handler per call: config is read at request time.
        let handler = ToolHandler::from_env();
        let result = handler.call_tool(&params.name, params.arguments).await;
        json_result(request.id, &result)
    }

    /// Handle read resource request
    async fn handle_read_resource(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let params: ReadResourceParams = match request.params {
            Some(p) => match serde_json::from_value(p) {
                Ok(params) => params,
                Err(e) => {
                    return JsonRpcResponse::error(
                        request.id,
                        JsonRpcError::invalid_params(e.to_string()),
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(
                    request.id,
                    JsonRpcError::invalid_params("Missing resource parameters"),
                );
            }
        };

        let handler = ToolHandler::from_env();
        match handler.read_resource(&params.uri).await {
            Ok(result) => json_result(request.id, &result),
            Err(e) => JsonRpcResponse::error(
                request.id,
                JsonRpcError::invalid_params(e.to_string()),
            ),
        }
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn json_result<T: serde::Serialize>(id: RequestId, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_initialize_advertises_tools_and_resources() {
        let mut server = McpServer::new();
        let response = server
            .handle_message(r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#)
            .await
            .unwrap()
            .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "weather-widget");
        assert!(result["capabilities"]["tools"].is_object());
        assert!(result["capabilities"]["resources"].is_object());
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let mut server = McpServer::new();
        let response = server
            .handle_message(r#"{"jsonrpc":"2.0","id":2,"method":"prompts/list"}"#)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn test_initialized_notification_has_no_response() {
        let mut server = McpServer::new();
        let response = server
            .handle_message(r#"{"jsonrpc":"2.0","id":3,"method":"notifications/initialized"}"#)
            .await
            .unwrap();
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_parse_error_response() {
        let mut server = McpServer::new();
        let response = server.handle_message("not json").await.unwrap().unwrap();
        assert_eq!(response.error.unwrap().code, -32700);
    }

    #[tokio::test]
    async fn test_list_tools() {
        let mut server = McpServer::new();
        let response = server
            .handle_message(r#"{"jsonrpc":"2.0","id":4,"method":"tools/list"}"#)
            .await
            .unwrap()
            .unwrap();

        let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
        assert!(tools.iter().any(|t| t["name"] == "render-weather-widget"));
    }
}
