//! Mock implementations for testing
//!
//! This module provides in-memory stand-ins for the two I/O seams:
//! - A command executor that records calls and replays canned results
//! - A registry source that serves fixed items or fails every request

use crate::core::{EntityKind, IndexEntry, RawCommandResult, RegistryFetchError, RegistryItem, Style};
use crate::runtime::process::{CommandExecutor, RunOptions};
use crate::runtime::registry::RegistrySource;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// One call observed by [`MockExecutor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub options: RunOptions,
}

/// Command executor that replays queued results in order
pub struct MockExecutor {
    calls: Mutex<Vec<RecordedCall>>,
    queued: Mutex<VecDeque<RawCommandResult>>,
    fallback: RawCommandResult,
}

impl MockExecutor {
    /// Every call succeeds with empty output unless results are queued
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            queued: Mutex::new(VecDeque::new()),
            fallback: success(""),
        }
    }

    /// Queue a result for the next unanswered call
    pub fn push_result(&self, result: RawCommandResult) -> &Self {
        self.queued.lock().unwrap().push_back(result);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandExecutor for MockExecutor {
    async fn run(&self, program: &str, args: &[String], options: RunOptions) -> RawCommandResult {
        self.calls.lock().unwrap().push(RecordedCall {
            program: program.to_string(),
            args: args.to_vec(),
            options,
        });
        self.queued
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Successful raw result with the given stdout
pub fn success(output: &str) -> RawCommandResult {
    RawCommandResult {
        success: true,
        output: output.to_string(),
        error: None,
    }
}

/// Failed raw result with the given stderr
pub fn failure(error: &str) -> RawCommandResult {
    RawCommandResult {
        success: false,
        output: String::new(),
        error: Some(error.to_string()),
    }
}

/// Registry source backed by a map, or failing every request
pub struct MockRegistry {
    items: HashMap<(EntityKind, String), RegistryItem>,
    failing: bool,
    requests: AtomicUsize,
}

impl MockRegistry {
    /// Registry that knows nothing; unknown items fail with 404
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            failing: false,
            requests: AtomicUsize::new(0),
        }
    }

    /// Registry whose every request fails at the transport level
    pub fn unreachable() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub fn with_item(mut self, kind: EntityKind, item: RegistryItem) -> Self {
        self.items.insert((kind, item.name.clone()), item);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl Default for MockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistrySource for MockRegistry {
    async fn fetch(
        &self,
        kind: EntityKind,
        name: &str,
        _style: Style,
    ) -> Result<RegistryItem, RegistryFetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(RegistryFetchError::Transport {
                kind,
                name: name.to_string(),
                message: "connection refused".to_string(),
            });
        }
        self.items
            .get(&(kind, name.to_string()))
            .cloned()
            .ok_or_else(|| RegistryFetchError::Status {
                kind,
                name: name.to_string(),
                status: "Not Found".to_string(),
            })
    }

    async fn fetch_index(&self, _style: Style) -> Result<Vec<IndexEntry>, RegistryFetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(RegistryFetchError::Index {
                message: "connection refused".to_string(),
            });
        }
        Ok(self
            .items
            .values()
            .map(|item| IndexEntry {
                name: item.name.clone(),
                item_type: item.item_type.clone().unwrap_or_default(),
                registry_dependencies: item.registry_dependencies.clone(),
            })
            .collect())
    }
}

/// Minimal registry item with one file per given `(name, content)` pair
pub fn registry_item(name: &str, files: &[(&str, &str)]) -> RegistryItem {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "files": files
            .iter()
            .map(|(file, content)| serde_json::json!({"name": file, "content": content}))
            .collect::<Vec<_>>(),
    }))
    .expect("valid registry item")
}
