//! HTTP transport for the MCP server
//!
//! A stateless `POST /mcp` endpoint: each request gets a fresh server
//! object and re-reads configuration, so no mutable state is shared across
//! concurrent invocations. Failures that escape the normal dispatch paths
//! are reported as a JSON-RPC internal error, never left unhandled.

use axum::{routing::post, Json, Router};
use serde_json::{json, Value};

use crate::error::Result;
use crate::mcp::server::McpServer;
use crate::mcp::types::JsonRpcRequest;

/// Build the MCP router
pub fn router() -> Router {
    Router::new().route("/mcp", post(handle_mcp))
}

/// Serve MCP over HTTP on the given port
pub async fn serve(port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("MCP HTTP transport listening on {}", listener.local_addr()?);
    axum::serve(listener, router()).await?;
    Ok(())
}

async fn handle_mcp(Json(body): Json<Value>) -> Json<Value> {
    Json(dispatch(body).await)
}

async fn dispatch(body: Value) -> Value {
    let request: JsonRpcRequest = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(e) => {
            return json!({
                "jsonrpc": "2.0",
                "error": {"code": -32700, "message": format!("Parse error: {}", e)},
                "id": null,
            });
        }
    };

    let mut server = McpServer::new();
    match server.handle_request(request).await {
        Some(response) => serde_json::to_value(response).unwrap_or_else(|e| {
            tracing::error!("Error handling MCP request: {}", e);
            internal_error()
        }),
        // Notification: nothing to send back.
        None => Value::Null,
    }
}

fn internal_error() -> Value {
    json!({
        "jsonrpc": "2.0",
        "error": {"code": -32603, "message": "Internal server error"},
        "id": null,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dispatch_ping() {
        let response = dispatch(json!({"jsonrpc": "2.0", "id": 7, "method": "ping"})).await;
        assert_eq!(response["id"], 7);
        assert!(response["result"].is_object());
    }

    #[tokio::test]
    async fn test_dispatch_malformed_body() {
        let response = dispatch(json!({"not": "a request"})).await;
        assert_eq!(response["error"]["code"], -32700);
        assert!(response["id"].is_null());
    }

    #[tokio::test]
    async fn test_each_request_gets_fresh_state() {
        // Two dispatches share nothing; both must succeed independently.
        let first = dispatch(json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"})).await;
        let second = dispatch(json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})).await;
        assert_eq!(first["result"]["tools"], second["result"]["tools"]);
    }
}
