//! Newline-delimited JSON-RPC over stdin/stdout
//!
//! One request per line in, one response per line out. Requests are served
//! concurrently, each on its own task, so responses may be written in a
//! different order than the requests arrived. Logging must never go to
//! stdout while this transport is running.

use crate::core::{Error, Result};
use crate::server::error::{codes, ToolError};
use crate::server::handler::ToolHandler;
use crate::server::tools::tool_definitions;
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec, LinesCodecError};
use tracing::{debug, error, info, warn};

/// Protocol revision reported when the client does not name one
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Name the server reports during `initialize`
pub const SERVER_NAME: &str = "shadcn-ui-mcp-server";

const MAX_LINE_LENGTH: usize = 8 * 1024 * 1024;

#[derive(Debug, Deserialize)]
struct Request {
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

#[derive(Debug, Default, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

fn success(id: Value, result: Value) -> Value {
    json!({"jsonrpc": "2.0", "id": id, "result": result})
}

fn failure(id: Value, code: i64, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {"code": code, "message": message.into()},
    })
}

/// Handle one raw line; `None` means nothing should be written back
pub async fn handle_message(handler: Arc<ToolHandler>, line: &str) -> Option<Value> {
    let value: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Received malformed JSON");
            return Some(failure(Value::Null, codes::PARSE_ERROR, format!("Parse error: {}", e)));
        }
    };

    let request: Request = match serde_json::from_value(value) {
        Ok(request) => request,
        Err(e) => {
            return Some(failure(
                Value::Null,
                codes::INVALID_REQUEST,
                format!("Invalid request: {}", e),
            ))
        }
    };

    // Notifications carry no id and never get a reply
    let Some(id) = request.id else {
        debug!(method = %request.method, "Ignoring notification");
        return None;
    };

    debug!(method = %request.method, "Handling request");
    let response = match request.method.as_str() {
        "initialize" => {
            let version = request
                .params
                .get("protocolVersion")
                .and_then(Value::as_str)
                .unwrap_or(PROTOCOL_VERSION)
                .to_string();
            success(
                id,
                json!({
                    "protocolVersion": version,
                    "capabilities": {"tools": {}},
                    "serverInfo": {"name": SERVER_NAME, "version": crate::VERSION},
                }),
            )
        }
        "ping" => success(id, json!({})),
        "tools/list" => success(id, json!({"tools": tool_definitions()})),
        "tools/call" => match call_tool(handler, request.params).await {
            Ok(text) => success(id, json!({"content": [{"type": "text", "text": text}]})),
            Err(e) => failure(id, e.code(), e.to_string()),
        },
        other => failure(
            id,
            codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", other),
        ),
    };
    Some(response)
}

/// Run the tool on its own task so a panic becomes an error response
async fn call_tool(handler: Arc<ToolHandler>, params: Value) -> std::result::Result<String, ToolError> {
    let params: CallParams =
        serde_json::from_value(params).map_err(|e| ToolError::invalid_params(e.to_string()))?;

    let name = params.name.clone();
    let task = tokio::spawn(async move { handler.call(&params.name, params.arguments).await });
    match task.await {
        Ok(result) => result,
        Err(e) => {
            error!(tool = %name, error = %e, "Tool task failed");
            Err(ToolError::internal(format!("Internal error: tool {} aborted", name)))
        }
    }
}

/// JSON-RPC server bound to a pair of byte streams
pub struct StdioServer {
    handler: Arc<ToolHandler>,
}

impl StdioServer {
    pub fn new(handler: ToolHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Serve on the process's stdin and stdout until stdin closes
    pub async fn serve(self) -> Result<()> {
        self.serve_io(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve on arbitrary streams until `reader` reaches end of input
    pub async fn serve_io<R, W>(self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let mut lines = FramedRead::new(reader, LinesCodec::new_with_max_length(MAX_LINE_LENGTH));
        let mut sink = FramedWrite::new(writer, LinesCodec::new());
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();

        let writer_task = tokio::spawn(async move {
            while let Some(line) = rx.recv().await {
                sink.send(line).await?;
            }
            Ok::<_, LinesCodecError>(())
        });

        info!("Serving MCP requests on stdio");
        while let Some(next) = lines.next().await {
            let line = match next {
                Ok(line) => line,
                Err(LinesCodecError::MaxLineLengthExceeded) => {
                    warn!(limit = MAX_LINE_LENGTH, "Dropping oversized request line");
                    continue;
                }
                Err(LinesCodecError::Io(e)) => return Err(e.into()),
            };
            if line.trim().is_empty() {
                continue;
            }

            let handler = self.handler.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = handle_message(handler, &line).await {
                    if tx.send(response.to_string()).is_err() {
                        warn!("Response dropped, writer has stopped");
                    }
                }
            });
        }

        // In-flight tasks hold their own senders; the writer drains them all
        drop(tx);
        match writer_task.await? {
            Ok(()) => {}
            Err(LinesCodecError::Io(e)) => return Err(Error::Io(e)),
            Err(e) => return Err(Error::Io(std::io::Error::new(std::io::ErrorKind::Other, e))),
        }
        info!("Input closed, shutting down");
        Ok(())
    }
}
