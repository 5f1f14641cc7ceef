//! Shared data types
//!
//! This module holds the shapes that flow between the runtime pieces:
//! - Registry styles and entity kinds
//! - Raw and classified command results
//! - Registry items and index entries
//! - Project inspection results

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Visual variant selecting which registry subtree to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    #[default]
    Default,
    NewYork,
}

impl Style {
    /// Path segment and CLI value for this style
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::NewYork => "new-york",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "new-york" => Ok(Self::NewYork),
            other => Err(format!(
                "unknown style '{}', expected 'default' or 'new-york'",
                other
            )),
        }
    }
}

/// Category of item fetched from the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Component,
    Block,
    Example,
}

impl EntityKind {
    /// URL path segment for this kind
    pub fn segment(&self) -> &'static str {
        match self {
            Self::Component => "ui",
            Self::Block => "block",
            Self::Example => "example",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Component => "component",
            Self::Block => "block",
            Self::Example => "example",
        };
        f.write_str(label)
    }
}

/// Unprocessed outcome of a single external process invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommandResult {
    /// True only when the process exited with code 0
    pub success: bool,
    /// Everything the child wrote to stdout
    pub output: String,
    /// Captured stderr, or the runner-level failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RawCommandResult {
    /// Result for a process that could not be started at all
    pub fn launch_failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(message.into()),
        }
    }

    /// Error text, or a placeholder when the command left none
    pub fn error_text(&self) -> &str {
        self.error.as_deref().unwrap_or("unknown error")
    }
}

/// Installed/skipped/errored partition of raw CLI output
///
/// `None` means the corresponding marker never appeared; `Some(vec![])`
/// means it appeared but no items followed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ClassifiedResult {
    /// True when no recognized marker was seen
    pub fn is_empty(&self) -> bool {
        self.installed.is_none() && self.skipped.is_none() && self.errors.is_none()
    }
}

/// One file of a registry item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl RegistryFile {
    /// File name as published; older payloads use `name`, newer ones `path`
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.path.as_deref())
            .unwrap_or("")
    }
}

/// Tailwind section of a registry item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TailwindSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Theme variables for light and dark mode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CssVars {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<BTreeMap<String, String>>,
}

/// Structured definition returned by the remote registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub dev_dependencies: Vec<String>,
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
    #[serde(default)]
    pub files: Vec<RegistryFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tailwind: Option<TailwindSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_vars: Option<CssVars>,
}

/// Entry of the registry index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub name: String,
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
}

/// Frontend framework detected from package.json
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Next,
    Vite,
    Remix,
    Gatsby,
    Astro,
}

/// Facts gathered by inspecting a project directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub has_tailwind: bool,
    #[serde(rename = "hasTypeScript")]
    pub has_typescript: bool,
    pub framework: Option<Framework>,
}

/// Project status combining inspection with components.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatus {
    pub initialized: bool,
    pub framework: Option<Framework>,
    pub tailwind_installed: bool,
    pub components_installed: Vec<String>,
    pub blocks_installed: Vec<String>,
    pub typescript: bool,
    pub style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tailwind_config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tailwind_css: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<BTreeMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_round_trips_through_str() {
        assert_eq!("new-york".parse::<Style>().unwrap(), Style::NewYork);
        assert_eq!(Style::default().to_string(), "default");
        assert!("brutalist".parse::<Style>().is_err());
        assert_eq!(serde_json::to_string(&Style::NewYork).unwrap(), "\"new-york\"");
    }

    #[test]
    fn test_entity_kind_segments() {
        assert_eq!(EntityKind::Component.segment(), "ui");
        assert_eq!(EntityKind::Block.segment(), "block");
        assert_eq!(EntityKind::Example.segment(), "example");
        assert_eq!(EntityKind::Component.to_string(), "component");
    }

    #[test]
    fn test_registry_item_tolerates_missing_lists() {
        let item: RegistryItem = serde_json::from_str(
            r#"{"name":"badge","type":"registry:ui","files":[{"path":"ui/badge.tsx","content":"x"}]}"#,
        )
        .unwrap();
        assert!(item.dependencies.is_empty());
        assert!(item.registry_dependencies.is_empty());
        assert_eq!(item.files[0].display_name(), "ui/badge.tsx");
        assert!(item.css_vars.is_none());
    }

    #[test]
    fn test_registry_item_requires_name() {
        let result = serde_json::from_str::<RegistryItem>(r#"{"files":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_classified_result_omits_absent_sections() {
        let classified = ClassifiedResult {
            installed: Some(vec!["button".to_string()]),
            ..Default::default()
        };
        let json = serde_json::to_value(&classified).unwrap();
        assert_eq!(json, serde_json::json!({"installed": ["button"]}));
        assert!(ClassifiedResult::default().is_empty());
    }
}
