use crate::core::types::EntityKind;
use thiserror::Error;

/// Error raised by the registry fetcher
///
/// Transport failures, non-2xx responses and undecodable bodies all land
/// here. The entity kind and name are embedded in the message so a failed
/// request can be traced back to what was asked for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryFetchError {
    #[error("Failed to fetch {kind} {name}: {status}")]
    Status {
        kind: EntityKind,
        name: String,
        status: String,
    },

    #[error("Error fetching {kind} {name}: {message}")]
    Transport {
        kind: EntityKind,
        name: String,
        message: String,
    },

    #[error("Error fetching {kind} {name}: invalid registry payload: {message}")]
    Parse {
        kind: EntityKind,
        name: String,
        message: String,
    },

    #[error("Error fetching registry index: {message}")]
    Index { message: String },
}

impl RegistryFetchError {
    /// Name of the item the failed request was for, if any
    pub fn item_name(&self) -> Option<&str> {
        match self {
            Self::Status { name, .. } | Self::Transport { name, .. } | Self::Parse { name, .. } => {
                Some(name.as_str())
            }
            Self::Index { .. } => None,
        }
    }
}

/// Error type for the shadcn/ui MCP library
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    RegistryFetch(#[from] RegistryFetchError),

    #[error("No files found in registry item {0}")]
    EmptyRegistryItem(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Async task error: {0}")]
    AsyncTask(#[from] tokio::task::JoinError),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// Check if retrying the same request could succeed
    ///
    /// Nothing in this crate retries on its own; this only informs callers.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RegistryFetch(RegistryFetchError::Transport { .. })
                | Self::RegistryFetch(RegistryFetchError::Index { .. })
                | Self::Io(_)
                | Self::AsyncTask(_)
        )
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(what) => {
                format!("{} not found. Use list_components or list_blocks to see what is available.", what)
            }
            Self::RegistryFetch(err) => {
                format!("{}. Check your network connection and the registry URL.", err)
            }
            Self::Configuration(msg) => {
                format!("Configuration error: {}. Check your config file and command-line flags.", msg)
            }
            _ => self.to_string(),
        }
    }
}

/// Convenient result type for the library
pub type Result<T> = std::result::Result<T, Error>;
