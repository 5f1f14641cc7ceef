//! MCP server surface
//!
//! This module handles:
//! - Tool definitions and argument decoding
//! - The request orchestrator that turns tool calls into registry and CLI work
//! - The newline-delimited JSON-RPC transport on stdio

pub mod error;
pub mod handler;
#[cfg(feature = "mcp")]
pub mod stdio;
pub mod tools;


pub use error::ToolError;
pub use handler::ToolHandler;
#[cfg(feature = "mcp")]
pub use stdio::StdioServer;
pub use tools::{tool_definitions, ToolDefinition};
