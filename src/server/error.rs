use crate::core::Error;
use thiserror::Error;

/// JSON-RPC error codes used by the server
pub mod codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;
}

/// Failure of a single tool call, as reported to the client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Unknown tool: {0}")]
    MethodNotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ToolError {
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_params<S: Into<String>>(msg: S) -> Self {
        Self::InvalidParams(msg.into())
    }

    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }

    /// JSON-RPC code for this error
    ///
    /// Unknown names are reported as an invalid request, matching what MCP
    /// clients of the shadcn server already expect.
    pub fn code(&self) -> i64 {
        match self {
            Self::NotFound(_) => codes::INVALID_REQUEST,
            Self::InvalidParams(_) => codes::INVALID_PARAMS,
            Self::MethodNotFound(_) => codes::METHOD_NOT_FOUND,
            Self::Internal(_) => codes::INTERNAL_ERROR,
        }
    }
}

impl From<Error> for ToolError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidInput(msg) => Self::InvalidParams(msg),
            Error::NotFound(msg) => Self::NotFound(format!("{} not found", msg)),
            other => Self::Internal(format!("Internal error: {}", other)),
        }
    }
}
