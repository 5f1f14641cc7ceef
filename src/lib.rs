//! MCP server for shadcn/ui.
//!
//! Exposes the shadcn/ui component and block catalog, the remote registry
//! and the `shadcn` CLI as MCP tools over newline-delimited JSON-RPC on
//! stdio.
//!
//! ## Usage
//!
//! ```bash
//! # Serve on stdio (what MCP clients launch)
//! shadcn-ui-mcp
//!
//! # List the tools
//! shadcn-ui-mcp tools
//!
//! # Run a single tool
//! shadcn-ui-mcp call get_component_metadata '{"name":"button"}'
//! ```
//!
//! ## Library
//!
//! ```no_run
//! use shadcn_ui_mcp::{core::Config, server::ToolHandler};
//!
//! # async fn demo() -> shadcn_ui_mcp::core::Result<()> {
//! let handler = ToolHandler::from_config(&Config::default())?;
//! let text = handler
//!     .call("list_blocks", serde_json::json!({"category": "charts"}))
//!     .await
//!     .expect("tool call");
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod core;
pub mod demos;
pub mod runtime;
pub mod server;

#[cfg(test)]
mod testing;

/// Crate version, reported to clients during `initialize`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
